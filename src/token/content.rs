// SPDX-License-Identifier: MPL-2.0
//! The content resolver.
//!
//! [`resolve`] collapses the three optional descriptor fields into exactly one
//! [`Content`] variant. The precedence mirrors how previews behave: a remote
//! source outranks local bytes, and a recognized image type outranks the
//! generic link treatment. Resolution is total and performs no I/O.

use super::{ipfs, mime, Token};
use base64::prelude::*;

/// Maximum characters of decoded text shown in a full preview.
pub const TEXT_PREVIEW_MAX_CHARS: usize = 1000;

/// Appended when [`clip`] drops trailing content.
pub const ELLIPSIS: &str = "…";

/// How a remote image source must be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Content-addressed source: resolved through a gateway, then rendered
    /// directly.
    ContentAddressed,
    /// Ordinary URL: untrusted, displayed only through the validating fetch
    /// path.
    Direct,
}

/// What a token's preview should render. Exactly one variant per descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// An image reachable through `source`.
    RemoteImage { source: String, origin: ImageOrigin },
    /// An image carried inline as raw bytes, displayed via a `data:` URI.
    InlineImage { mime: String, bytes: Vec<u8> },
    /// A non-image source, shown as a QR code plus copyable identifier.
    Link { source: String },
    /// Plain text decoded from the token's bytes.
    Text { text: String },
    /// Bytes of an unrecognized type; only the filename is shown.
    UnknownFile { filename: String },
    /// Nothing to show. The fallback icon branch.
    Empty,
}

impl Content {
    /// Base64 `data:` URI for inline image content, `None` for every other
    /// variant.
    pub fn data_uri(&self) -> Option<String> {
        match self {
            Content::InlineImage { mime, bytes } => Some(data_uri(mime, bytes)),
            _ => None,
        }
    }
}

/// Resolves a descriptor into its content variant.
pub fn resolve(token: &Token) -> Content {
    let mime = token.filename.as_deref().and_then(mime::resolve);
    let is_image = mime.as_ref().is_some_and(mime::is_image);

    if let Some(source) = token.source.as_deref() {
        if is_image {
            let origin = if ipfs::is_content_addressed(source) {
                ImageOrigin::ContentAddressed
            } else {
                ImageOrigin::Direct
            };
            return Content::RemoteImage {
                source: source.to_string(),
                origin,
            };
        }
        // Non-image or unresolvable type: treat the source as a plain link.
        return Content::Link {
            source: source.to_string(),
        };
    }

    if let (Some(filename), Some(bytes)) = (token.filename.as_deref(), token.bytes.as_deref()) {
        if let Some(mime) = &mime {
            if mime::is_plain_text(mime) {
                return Content::Text {
                    text: String::from_utf8_lossy(bytes).into_owned(),
                };
            }
            if mime::is_image(mime) {
                return Content::InlineImage {
                    mime: mime.essence_str().to_string(),
                    bytes: bytes.to_vec(),
                };
            }
        }
        return Content::UnknownFile {
            filename: filename.to_string(),
        };
    }

    Content::Empty
}

/// Builds a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

/// Truncates `text` to at most `max_chars` characters, appending an ellipsis
/// only when something was actually cut. Never splits a code point.
pub fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((boundary, _)) => format!("{}{ELLIPSIS}", &text[..boundary]),
        None => text.to_string(),
    }
}
