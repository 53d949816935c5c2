// SPDX-License-Identifier: MPL-2.0
//! Token content preview component.
//!
//! [`component::State`] owns everything a preview needs after resolution:
//! the content variant, QR data for link content, and fetched pixels for
//! remote images. The host application forwards [`component::Message`]s and
//! maps [`component::Effect`]s to side effects such as clipboard writes.

pub mod component;
pub mod identifier;
pub mod message_box;

pub use component::{Effect, Message, PreviewMode, State};
