// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Quiet button for secondary actions (copy, dismiss).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::GRAY_700
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_200,
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
