//! Test logging bootstrap shared by the backend's unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_LEVEL: &str = "warn";

/// Install the test subscriber once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_LEVEL`].
/// Set `TEST_LOG_JSON=1` to get the same JSON lines the service emits.
///
/// ```bash
/// TEST_LOG=xeri_backend=debug cargo test -p xeri-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_LEVEL));

        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time();
        // try_init: another harness may already own the global subscriber.
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
