// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants carry plain strings so errors stay `Clone` and can travel inside
/// Iced messages across async task boundaries.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Network failure while fetching remote content.
    Fetch(String),
    /// Remote or inline bytes could not be decoded as an image.
    Image(String),
    /// A content-addressed source could not be rewritten to a fetchable URL.
    Resolve(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Resolve(e) => write!(f, "Resolve Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fetch_error_formats_properly() {
        let err = Error::Fetch("connection reset".into());
        assert_eq!(format!("{}", err), "Fetch Error: connection reset");
    }

    #[test]
    fn resolve_error_formats_properly() {
        let err = Error::Resolve("missing cid".into());
        assert!(format!("{}", err).contains("missing cid"));
    }

    #[test]
    fn errors_are_cloneable() {
        let err = Error::Image("truncated data".into());
        let clone = err.clone();
        assert_eq!(format!("{}", err), format!("{}", clone));
    }
}
