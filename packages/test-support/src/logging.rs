//! Test logging initialization shared by every test binary in the workspace.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `"warn"`. Setting `TEST_LOG_JSON=1` switches
/// the output to one JSON object per event.
///
/// ```bash
/// TEST_LOG=e2e_fixtures=debug cargo test -p e2e-fixtures
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time();

        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
