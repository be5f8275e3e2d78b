//! Core types shared by every pipeline stage.
//!
//! Currently this is the error taxonomy: [`CssError`] and the [`FilePurpose`]
//! tag that records why a failed file read was attempted.

pub mod error;

pub use error::{CssError, FilePurpose};

pub(crate) use error::read_text_lossy;
