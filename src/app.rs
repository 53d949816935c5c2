// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the preview component.
//!
//! The `App` struct wires together localization, configuration, and the
//! preview, and translates component effects into side effects like clipboard
//! writes. Policy decisions (window sizing, how a CLI target becomes a token)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::token::{ipfs, Token};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::preview::{self, message_box, PreviewMode};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, clipboard, window, Element, Length, Task, Theme};

/// Root Iced application state bridging the preview component, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    preview: preview::State,
    /// Gateway base URL used for content-addressed sources.
    gateway: String,
    load_error: Option<Error>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Preview(preview::Message),
    TokenLoaded(Result<Token, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional URL or file path naming the token to preview.
    pub target: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// token loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let gateway = config.gateway().to_string();

        let (preview, preview_task) = preview::State::new(&Token::empty(), &gateway);

        let load_task = match flags.target {
            Some(target) => Task::perform(load_target(target), Message::TokenLoaded),
            None => Task::none(),
        };

        (
            App {
                i18n,
                preview,
                gateway,
                load_error: None,
            },
            Task::batch([preview_task.map(Message::Preview), load_task]),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TokenLoaded(Ok(token)) => {
                self.load_error = None;
                self.preview
                    .set_token(&token, &self.gateway)
                    .map(Message::Preview)
            }
            Message::TokenLoaded(Err(error)) => {
                eprintln!("Failed to load token target: {}", error);
                self.load_error = Some(error);
                Task::none()
            }
            Message::Preview(message) => match self.preview.update(message) {
                preview::Effect::CopySource(source) => clipboard::write(source),
                preview::Effect::None => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let thumbnail_pane = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Container::new(
                    self.preview
                        .view(PreviewMode::Thumbnail, &self.i18n, None)
                        .map(Message::Preview),
                )
                .width(sizing::THUMBNAIL_TILE)
                .height(sizing::THUMBNAIL_TILE)
                .padding(spacing::XS)
                .style(styles::container::tile),
            )
            .push(
                Text::new(self.i18n.tr("preview-pane-thumbnail"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        let mut full_pane = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(self.i18n.tr("preview-pane-full"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        if let Some(error) = &self.load_error {
            full_pane = full_pane.push(message_box::view(format!(
                "{}: {}",
                self.i18n.tr("error-load-target"),
                error
            )));
        }

        let full_preview = Container::new(
            self.preview
                .view(PreviewMode::Full, &self.i18n, None)
                .map(Message::Preview),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        full_pane = full_pane.push(full_preview);

        Row::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .height(Length::Fill)
            .push(thumbnail_pane)
            .push(full_pane)
            .into()
    }
}

/// Builds a token from a CLI target: URL-like targets keep their source,
/// anything else is read from disk.
async fn load_target(target: String) -> Result<Token, Error> {
    if is_url(&target) {
        Ok(token_from_url(target))
    } else {
        Token::from_file(&target)
    }
}

fn is_url(target: &str) -> bool {
    target.starts_with("http://")
        || target.starts_with("https://")
        || ipfs::is_content_addressed(target)
}

/// The last path segment doubles as the filename for MIME inference, but only
/// when it actually looks like one.
fn token_from_url(url: String) -> Token {
    let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(&url);
    let mut segments = after_scheme.split('/');
    let _authority = segments.next(); // host or content identifier
    let filename = segments
        .next_back()
        .filter(|segment| segment.contains('.'))
        .map(str::to_string);

    Token {
        filename,
        source: Some(url),
        bytes: None,
    }
}
