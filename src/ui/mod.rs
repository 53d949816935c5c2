// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`preview`] - The token content preview component (the heart of the app)
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod icons;
pub mod preview;
pub mod styles;
