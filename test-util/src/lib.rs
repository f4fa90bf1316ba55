/// Meant to be called from a `#[ctor::ctor]` function in each test binary, so that it runs once
/// at load time (i.e. presumably before the tests run).
pub fn ctor_overall_init() {
    // Ignore errors, since there may not be a .env file (e.g. in CI)
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    // Use try_init, since a test binary may link in more than one ctor that calls this.
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_test_writer()
        .try_init();
}
