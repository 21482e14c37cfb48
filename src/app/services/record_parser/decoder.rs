//! Text decoding for device export uploads
//!
//! Newer devices emit UTF-8; older firmware writes Windows-1252 (the
//! superset of ISO-8859-1 used by the vendor's PC software). Decoding is
//! attempted in that order and rejection of both is fatal for the upload.

use crate::error::{Error, Result};
use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use tracing::debug;

/// Decode raw upload bytes into text.
///
/// Tries strict UTF-8 first, then strict Windows-1252. Returns
/// [`Error::Encoding`] if neither encoding accepts the bytes.
pub fn decode_export_text(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok(text);
    }

    debug!("Upload is not valid UTF-8, falling back to Windows-1252");

    WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(Error::Encoding)
}
