// SPDX-License-Identifier: MPL-2.0
//! MIME inference from filenames.
//!
//! Resolution is purely extension-based. An unrecognized or missing extension
//! is not an error; callers treat `None` as "unknown type" and fall through to
//! a less specific rendering branch.

use mime_guess::mime;
use mime_guess::Mime;

/// Resolves a MIME type from a filename's extension, if recognized.
pub fn resolve(filename: &str) -> Option<Mime> {
    mime_guess::from_path(filename).first()
}

/// Whether the type belongs to the `image/*` family.
pub fn is_image(mime: &Mime) -> bool {
    mime.type_() == mime::IMAGE
}

/// Whether the type is `text/plain` (any parameters ignored).
pub fn is_plain_text(mime: &Mime) -> bool {
    mime.type_() == mime::TEXT && mime.subtype() == mime::PLAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_image_extensions() {
        for name in ["a.png", "b.jpg", "c.gif", "d.webp"] {
            let mime = resolve(name).expect("extension should be recognized");
            assert!(is_image(&mime), "{name} should resolve to an image type");
        }
    }

    #[test]
    fn resolves_plain_text() {
        let mime = resolve("readme.txt").expect("txt should be recognized");
        assert!(is_plain_text(&mime));
        assert!(!is_image(&mime));
    }

    #[test]
    fn markdown_is_not_plain_text() {
        // text/markdown resolves, but only text/plain gets the text branch.
        if let Some(mime) = resolve("readme.md") {
            assert!(!is_plain_text(&mime));
        }
    }

    #[test]
    fn unknown_extension_resolves_to_none() {
        assert!(resolve("artifact.xyzzy").is_none());
        assert!(resolve("no_extension").is_none());
    }

    #[test]
    fn essence_carries_full_mime_string() {
        let mime = resolve("pixel.png").unwrap();
        assert_eq!(mime.essence_str(), "image/png");
    }
}
