//! Logging for unit tests.
//!
//! Installed once per test binary by the `ctor` hook in `lib.rs`. The filter is taken
//! from `TEST_LOG`, then `RUST_LOG`, and defaults to `warn` so passing runs stay quiet:
//!
//! ```bash
//! TEST_LOG=veto_backend=debug cargo test -p veto-backend series
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent; a subscriber installed elsewhere first is left in place.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
