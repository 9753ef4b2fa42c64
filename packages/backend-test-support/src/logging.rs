//! One subscriber per test process, shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// `TEST_LOG=1` is shorthand for `debug`; any other value is a filter
/// directive. Falls back to `RUST_LOG`, then to `warn`.
fn test_filter() -> EnvFilter {
    match std::env::var("TEST_LOG").ok().as_deref() {
        Some("1") | Some("true") => EnvFilter::new("debug"),
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Install the captured, timestamp-free test subscriber. Idempotent.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
