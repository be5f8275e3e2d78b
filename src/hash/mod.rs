//! Fingerprinting of font assets and render options.
//!
//! The fingerprint is an MD5 digest, rendered as 32 lowercase hex characters,
//! over:
//!
//! 1. the text content of every file in [`RenderOptions::files`], in order
//! 2. the JSON serialization of the complete [`RenderOptions`]
//!
//! Changing any font byte or any option (name, codepoints, template options,
//! ...) therefore changes every generated asset URL. File contents are decoded
//! as UTF-8 with invalid sequences replaced by U+FFFD before hashing, so the
//! fingerprint of a binary font is stable but not the digest of its raw bytes.

use md5::{Digest, Md5};

use crate::core::{CssError, FilePurpose, read_text_lossy};
use crate::options::RenderOptions;

/// Compute the cache-busting fingerprint for `options`.
///
/// # Errors
///
/// Returns [`CssError::FileRead`] if any listed file is missing or unreadable.
///
/// # Examples
///
/// ```rust,no_run
/// use iconfont_css::{RenderOptions, compute_hash};
///
/// let options = RenderOptions::new("icons").with_files(["dist/icons.woff"]);
/// let hash = compute_hash(&options)?;
/// assert_eq!(hash.len(), 32);
/// # Ok::<(), iconfont_css::CssError>(())
/// ```
pub fn compute_hash(options: &RenderOptions) -> Result<String, CssError> {
    let mut hasher = Md5::new();

    for file in &options.files {
        let content = read_text_lossy(file, FilePurpose::FontAsset)?;
        tracing::debug!("Hashing font file {} ({} bytes)", file.display(), content.len());
        hasher.update(content.as_bytes());
    }

    let serialized = serde_json::to_string(options)?;
    hasher.update(serialized.as_bytes());

    let hash = hex::encode(hasher.finalize());
    tracing::debug!("Computed fingerprint {} for '{}'", hash, options.font_name);
    Ok(hash)
}
