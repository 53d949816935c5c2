// SPDX-License-Identifier: MPL-2.0
//! `token_lens` is a small token media previewer built with the Iced GUI framework.
//!
//! A *token* is an identifier pointing at arbitrary media: an image behind a
//! URL, raw bytes with a filename, a plain link, or nothing at all. The crate
//! resolves a token descriptor into an explicit content variant and renders
//! exactly one preview branch for it, either as a compact thumbnail or as a
//! full preview with QR codes, decoded text, and copyable identifiers.

#![doc(html_root_url = "https://docs.rs/token_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod net;
pub mod token;
pub mod ui;
