// SPDX-License-Identifier: MPL-2.0
//! Preview component state and rendering.
//!
//! The component resolves its token once, up front, and keeps only derived
//! state: the [`Content`] variant, QR data for links, and image handles for
//! anything that needs pixels. Rendering is an exhaustive match over
//! `Content` × [`PreviewMode`], so every descriptor lands in exactly one
//! branch and the fallback is always reachable.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::net::{self, unsafe_image};
use crate::token::content::{self, Content, ImageOrigin};
use crate::token::{self, Token};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::preview::{identifier, message_box};
use crate::ui::styles;
use iced::widget::qr_code::{self, QRCode};
use iced::widget::{image, text, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Font, Length, Task};

/// Rendering density requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Compact, icon-only tile.
    Thumbnail,
    /// Rich preview: QR codes, decoded text, copyable identifiers.
    #[default]
    Full,
}

impl PreviewMode {
    pub fn is_thumbnail(self) -> bool {
        matches!(self, PreviewMode::Thumbnail)
    }
}

/// Progress of the remote image fetch, when the content requires one.
#[derive(Debug, Clone)]
enum RemoteImage {
    /// Content has no remote fetch.
    Idle,
    Loading,
    Ready(image::Handle),
    Failed(Error),
}

/// Preview component state. One instance per previewed token.
pub struct State {
    content: Content,
    qr: Option<qr_code::Data>,
    inline: Option<image::Handle>,
    remote: RemoteImage,
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Copy the full source to the clipboard.
    CopySource,
    /// A remote fetch finished. Tagged with the generation that started it.
    ImageFetched {
        generation: u64,
        result: Result<image::Handle, Error>,
    },
}

/// Side effects the host application must carry out.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Write the untruncated source to the system clipboard.
    CopySource(String),
}

impl State {
    /// Resolves `token` and kicks off whatever fetch its content requires.
    ///
    /// `gateway` is the base URL used for content-addressed sources.
    pub fn new(token: &Token, gateway: &str) -> (Self, Task<Message>) {
        Self::with_generation(token, gateway, 0)
    }

    /// Replaces the previewed token.
    ///
    /// Bumps the generation so completions of superseded fetches are dropped;
    /// re-invocations are unordered and a stale result must never overwrite a
    /// newer token's pixels.
    pub fn set_token(&mut self, token: &Token, gateway: &str) -> Task<Message> {
        let (next, task) = Self::with_generation(token, gateway, self.generation + 1);
        *self = next;
        task
    }

    fn with_generation(token: &Token, gateway: &str, generation: u64) -> (Self, Task<Message>) {
        let resolved = token::resolve(token);

        let qr = match &resolved {
            Content::Link { source } => qr_code::Data::new(source.as_bytes()).ok(),
            _ => None,
        };

        let inline = match &resolved {
            Content::InlineImage { bytes, .. } => Some(image::Handle::from_bytes(bytes.clone())),
            _ => None,
        };

        let (remote, task) = match &resolved {
            Content::RemoteImage {
                source,
                origin: ImageOrigin::ContentAddressed,
            } => {
                let future = net::load_content_addressed(source.clone(), gateway.to_string());
                let task = Task::perform(future, move |result| Message::ImageFetched {
                    generation,
                    result: result.map(image::Handle::from_bytes),
                });
                (RemoteImage::Loading, task)
            }
            Content::RemoteImage {
                source,
                origin: ImageOrigin::Direct,
            } => {
                let future = unsafe_image::fetch(source.clone());
                let task = Task::perform(future, move |result| Message::ImageFetched {
                    generation,
                    result: result.map(|decoded| {
                        image::Handle::from_rgba(decoded.width, decoded.height, decoded.rgba)
                    }),
                });
                (RemoteImage::Loading, task)
            }
            _ => (RemoteImage::Idle, Task::none()),
        };

        (
            Self {
                content: resolved,
                qr,
                inline,
                remote,
                generation,
            },
            task,
        )
    }

    /// The resolved content variant.
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::CopySource => match &self.content {
                Content::RemoteImage { source, .. } | Content::Link { source } => {
                    Effect::CopySource(source.clone())
                }
                _ => Effect::None,
            },
            Message::ImageFetched { generation, result } => {
                if generation != self.generation {
                    // Stale completion for a token that has been replaced.
                    return Effect::None;
                }
                self.remote = match result {
                    Ok(handle) => RemoteImage::Ready(handle),
                    Err(error) => RemoteImage::Failed(error),
                };
                Effect::None
            }
        }
    }

    /// Renders the preview.
    ///
    /// `default_icon` replaces the built-in missing-content glyph in the
    /// empty branch; everything else picks its own icon.
    pub fn view<'a>(
        &'a self,
        mode: PreviewMode,
        i18n: &I18n,
        default_icon: Option<Icon>,
    ) -> Element<'a, Message> {
        match &self.content {
            Content::RemoteImage { origin, .. } => self.view_remote(mode, *origin),
            Content::Link { source } => self.view_link(mode, source, i18n),
            Content::Text { text } => view_text(mode, text),
            Content::InlineImage { .. } => self.view_inline(),
            Content::UnknownFile { filename } => view_unknown(mode, filename),
            Content::Empty => view_empty(mode, i18n, default_icon.unwrap_or(icons::file_x)),
        }
    }

    fn view_remote(&self, mode: PreviewMode, origin: ImageOrigin) -> Element<'_, Message> {
        match origin {
            // Resolved content-addressed images display directly in both
            // modes, over a black backdrop.
            ImageOrigin::ContentAddressed => match &self.remote {
                RemoteImage::Ready(handle) => Container::new(contained_image(handle.clone()))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::image_backdrop)
                    .into(),
                _ => icons::filling(icons::file_image()).into(),
            },
            ImageOrigin::Direct => {
                if mode.is_thumbnail() {
                    return icons::filling(icons::file_image()).into();
                }
                match &self.remote {
                    RemoteImage::Ready(handle) => contained_image(handle.clone()).into(),
                    _ => icons::filling(icons::file_image()).into(),
                }
            }
        }
    }

    fn view_link<'a>(
        &'a self,
        mode: PreviewMode,
        source: &'a str,
        i18n: &I18n,
    ) -> Element<'a, Message> {
        if mode.is_thumbnail() {
            return icons::filling(icons::link()).into();
        }

        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center);

        // Sources too long for a QR code fall back to the identifier alone.
        if let Some(data) = &self.qr {
            let code = QRCode::new(data)
                .total_size(sizing::QR_TOTAL)
                .style(|_theme| qr_code::Style {
                    cell: palette::BLACK,
                    background: palette::WHITE,
                });
            column = column.push(
                Container::new(code)
                    .padding(spacing::SM)
                    .style(styles::container::qr_panel),
            );
        }

        column
            .push(identifier::view(
                source,
                Message::CopySource,
                i18n.tr("identifier-copy"),
            ))
            .into()
    }

    fn view_inline(&self) -> Element<'_, Message> {
        match &self.inline {
            Some(handle) => contained_image(handle.clone()).into(),
            // Unreachable for InlineImage content; keep the fallback total.
            None => icons::filling(icons::file_image()).into(),
        }
    }
}

/// Image filling its container while preserving aspect ratio.
fn contained_image(handle: image::Handle) -> Image<image::Handle> {
    Image::new(handle)
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
}

fn view_text<'a>(mode: PreviewMode, full_text: &'a str) -> Element<'a, Message> {
    if mode.is_thumbnail() {
        return icons::filling(icons::file_text()).into();
    }

    Text::new(content::clip(full_text, content::TEXT_PREVIEW_MAX_CHARS))
        .size(typography::BODY_SM)
        .font(Font::MONOSPACE)
        .wrapping(text::Wrapping::WordOrGlyph)
        .into()
}

fn view_unknown<'a>(mode: PreviewMode, filename: &str) -> Element<'a, Message> {
    if mode.is_thumbnail() {
        return icons::filling(icons::file()).into();
    }

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::file(), sizing::ICON_XXL))
        .push(message_box::view(filename.to_string()))
        .into()
}

fn view_empty<'a>(mode: PreviewMode, i18n: &I18n, default_icon: Icon) -> Element<'a, Message> {
    if mode.is_thumbnail() {
        return icons::filling(default_icon()).into();
    }

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(default_icon(), sizing::ICON_XXL))
        .push(message_box::view(i18n.tr("content-message-empty")))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IPFS_GATEWAY;

    fn state_for(token: &Token) -> State {
        State::new(token, DEFAULT_IPFS_GATEWAY).0
    }

    #[test]
    fn link_token_builds_qr_data() {
        let state = state_for(&Token::from_source("https://example.com/whitepaper.pdf"));
        assert!(matches!(state.content(), Content::Link { .. }));
        assert!(state.qr.is_some());
        assert!(state.inline.is_none());
        assert!(matches!(state.remote, RemoteImage::Idle));
    }

    #[test]
    fn inline_image_token_builds_handle_without_fetch() {
        let token = Token {
            source: None,
            bytes: Some(vec![0x89, b'P', b'N', b'G']),
            filename: Some("pixel.png".to_string()),
        };
        let state = state_for(&token);
        assert!(matches!(state.content(), Content::InlineImage { .. }));
        assert!(state.inline.is_some());
        assert!(matches!(state.remote, RemoteImage::Idle));
    }

    #[test]
    fn remote_image_token_starts_loading() {
        let token = Token {
            source: Some("ipfs://bafybeibadcafe/art.png".to_string()),
            bytes: None,
            filename: Some("art.png".to_string()),
        };
        let state = state_for(&token);
        assert!(matches!(state.remote, RemoteImage::Loading));
    }

    #[test]
    fn copy_effect_carries_full_source() {
        let long_source = format!("https://example.com/{}", "a".repeat(400));
        let mut state = state_for(&Token::from_source(long_source.clone()));
        match state.update(Message::CopySource) {
            Effect::CopySource(copied) => assert_eq!(copied, long_source),
            Effect::None => panic!("expected a copy effect"),
        }
    }

    #[test]
    fn copy_is_inert_without_a_source() {
        let mut state = state_for(&Token::empty());
        assert!(matches!(state.update(Message::CopySource), Effect::None));
    }

    #[test]
    fn stale_fetch_result_is_dropped() {
        let image_token = Token {
            source: Some("ipfs://bafybeibadcafe/art.png".to_string()),
            bytes: None,
            filename: Some("art.png".to_string()),
        };
        let (mut state, _task) = State::new(&image_token, DEFAULT_IPFS_GATEWAY);
        let stale_generation = state.generation;

        // Replace the token before the first fetch completes.
        let _task = state.set_token(&Token::empty(), DEFAULT_IPFS_GATEWAY);

        state.update(Message::ImageFetched {
            generation: stale_generation,
            result: Ok(image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(matches!(state.remote, RemoteImage::Idle));
    }

    #[test]
    fn current_fetch_result_is_applied() {
        let image_token = Token {
            source: Some("ipfs://bafybeibadcafe/art.png".to_string()),
            bytes: None,
            filename: Some("art.png".to_string()),
        };
        let (mut state, _task) = State::new(&image_token, DEFAULT_IPFS_GATEWAY);

        state.update(Message::ImageFetched {
            generation: state.generation,
            result: Ok(image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(matches!(state.remote, RemoteImage::Ready(_)));
    }

    #[test]
    fn failed_fetch_is_recorded() {
        let token = Token {
            source: Some("https://example.com/art.png".to_string()),
            bytes: None,
            filename: Some("art.png".to_string()),
        };
        let (mut state, _task) = State::new(&token, DEFAULT_IPFS_GATEWAY);

        state.update(Message::ImageFetched {
            generation: state.generation,
            result: Err(Error::Fetch("HTTP status: 404".to_string())),
        });
        assert!(matches!(state.remote, RemoteImage::Failed(_)));
    }

    #[test]
    fn thumbnail_mode_flag() {
        assert!(PreviewMode::Thumbnail.is_thumbnail());
        assert!(!PreviewMode::Full.is_thumbnail());
        assert_eq!(PreviewMode::default(), PreviewMode::Full);
    }
}
