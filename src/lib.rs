// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides stacked, auto-dismissing toast notifications for
//! applications built with the Iced GUI framework.
//!
//! The toast system lives in [`ui::toasts`]; [`app`] is a small demo screen
//! firing preset toasts, localized with Fluent and configured through a
//! `settings.toml` file.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
