use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by dnswire and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to see how a message is taken apart section by section:
///   RUST_LOG=dnswire::base::message=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .with_test_writer()
        .try_init()
        .ok();
}
