// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up" pattern.
//!
//! - [`toasts`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toasts;
