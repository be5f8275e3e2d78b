//! Test utilities for iconfont-css
//!
//! Helpers shared by unit and integration tests: one-time logging setup and
//! fixtures that lay out font files and templates in a temporary directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use iconfont_css::test_utils::{FontFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let fixture = FontFixture::new("icons").unwrap();
//! let options = fixture.options();
//! assert_eq!(options.files.len(), 5);
//! ```

pub mod fixtures;

pub use fixtures::FontFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=iconfont_css=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
