// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG glyphs.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Every glyph is a flat single-color shape tinted
//! at render time through the widget style, so one asset serves every theme.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `file_x` not `missing_content`).

use crate::ui::design_tokens::palette;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// An icon constructor, used where callers supply their own fallback glyph.
pub type Icon = fn() -> Svg<'static>;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/svg/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone()).style(muted)
        }
    };
}

define_icon!(file, "file.svg", "Generic file: sheet with a folded corner.");
define_icon!(file_text, "file-text.svg", "Text file: sheet with ruled lines.");
define_icon!(
    file_image,
    "file-image.svg",
    "Image file: sheet with a framed scene."
);
define_icon!(file_x, "file-x.svg", "Missing content: sheet with a cross.");
define_icon!(link, "link.svg", "Link: two chained segments.");

fn muted(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(palette::GRAY_500),
    }
}

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}

/// Stretches an icon over the available box. Thumbnail tiles use this.
pub fn filling(icon: Svg<'static>) -> Svg<'static> {
    icon.width(Length::Fill).height(Length::Fill)
}
