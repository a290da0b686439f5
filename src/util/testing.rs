//! Shared test bootstrap: tracing to the test writer, honoring RUST_LOG.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Install the test logging subscriber once per test binary.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
        info!("test setup complete");
    });
}
