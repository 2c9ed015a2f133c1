// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::demo::DemoToast;
use crate::ui::toasts;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A demo button was pressed.
    Demo(DemoToast),
    /// Forwarded from a rendered toast (close button).
    Toast(toasts::Message),
    /// Periodic tick driving the auto-dismiss timers.
    Tick(Instant),
    /// A language button was pressed.
    LanguageSelected(LanguageIdentifier),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
