// SPDX-License-Identifier: MPL-2.0
//! Copyable identifier row.
//!
//! Long sources are shown truncated but copied whole; the copy button always
//! carries the untruncated value through the message it emits.

use crate::token::content;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Row, Text};
use iced::{alignment, Element, Font};

/// Characters of the source shown before truncation kicks in.
pub const MAX_DISPLAY_CHARS: usize = 200;

/// The identifier as displayed: first [`MAX_DISPLAY_CHARS`] characters, with
/// a trailing ellipsis only when the source is longer.
pub fn display_text(source: &str) -> String {
    content::clip(source, MAX_DISPLAY_CHARS)
}

/// Renders the identifier with a copy button emitting `copy`.
pub fn view<'a, Message: Clone + 'a>(
    source: &str,
    copy: Message,
    copy_label: String,
) -> Element<'a, Message> {
    let shown = Text::new(display_text(source))
        .size(typography::BODY_SM)
        .font(Font::MONOSPACE)
        .wrapping(text::Wrapping::Glyph);

    let copy_button = button(Text::new(copy_label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost)
        .on_press(copy);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(shown)
        .push(copy_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_source_is_untouched() {
        assert_eq!(display_text("ipfs://abc"), "ipfs://abc");
    }

    #[test]
    fn exact_limit_shows_no_ellipsis() {
        let source = "a".repeat(200);
        assert_eq!(display_text(&source), source);
    }

    #[test]
    fn one_past_the_limit_truncates() {
        let source = "a".repeat(201);
        let shown = display_text(&source);
        assert_eq!(shown, format!("{}{}", "a".repeat(200), content::ELLIPSIS));
    }
}
