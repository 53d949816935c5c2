// SPDX-License-Identifier: MPL-2.0
//! Token descriptors and content resolution.
//!
//! A token points at arbitrary media through up to three independent fields:
//! a URL-like `source`, a raw byte buffer, and a filename used only for MIME
//! inference. [`resolve`] turns a descriptor into an explicit [`Content`]
//! variant that the UI matches exhaustively, so the rendering layer never has
//! to reason about which combination of optional fields is present.

pub mod content;
pub mod ipfs;
pub mod mime;

pub use content::{resolve, Content, ImageOrigin};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Descriptor of the media behind a token.
///
/// All three fields are independently optional; no field implies another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    /// URL or URI-like reference, possibly content-addressed (`ipfs://`).
    pub source: Option<String>,
    /// Raw media bytes.
    pub bytes: Option<Vec<u8>>,
    /// Filename used to infer a MIME type. Never touched as a path.
    pub filename: Option<String>,
}

impl Token {
    /// A token with no content at all. Resolves to the fallback branch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Token backed by a remote source.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Token backed by a local file: the file's bytes plus its name for MIME
    /// inference. The path itself is not retained.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(Self {
            source: None,
            bytes: Some(bytes),
            filename,
        })
    }
}
