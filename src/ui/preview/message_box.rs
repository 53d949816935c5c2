// SPDX-License-Identifier: MPL-2.0
//! Centered status message block.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, font, Element, Font, Length};

/// Renders `message` as a centered, bold, muted block.
///
/// Callers pass the localized text; the empty-content default is the
/// `content-message-empty` key.
pub fn view<'a, Message: 'a>(message: String) -> Element<'a, Message> {
    let body = Text::new(message)
        .size(typography::BODY)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .align_x(alignment::Horizontal::Center);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::message_box)
        .into()
}
