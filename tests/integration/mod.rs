//! Integration test suite for iconfont-css
//!
//! End-to-end tests that render stylesheets from real files on disk.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **render_pipeline**: fingerprint, URLs, context and template rendering together
//! - **config_files**: options loaded from TOML/JSON and rendered
//! - **error_scenarios**: missing files and broken templates

mod config_files;
mod error_scenarios;
mod render_pipeline;
