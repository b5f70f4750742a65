//! Image-input adapter.
//!
//! Encodes a raw image file as a self-describing inline data URL
//! (`data:<mime>;base64,<payload>`). The rest of the system treats the
//! result as an opaque string in a motorcycle's photo list; nothing ever
//! decodes or validates it.

use anyhow::{Context, Result};
use base64::Engine;
use std::path::Path;

/// Read an image file and encode it as an inline data URL.
pub fn encode_photo<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image file {}", path.display()))?;
    Ok(encode_photo_bytes(&bytes, mime_for_extension(path)))
}

/// Encode raw image bytes as an inline data URL with the given MIME type.
pub fn encode_photo_bytes(bytes: &[u8], mime: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, payload)
}

fn mime_for_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
