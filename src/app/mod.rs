// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast demo.
//!
//! The `App` owns the toast provider for the whole window, wires the stack
//! overlay to it and enters the provider scope around every update so demo
//! code can reach the manager through `use_toast`.

pub mod demo;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::toasts::{ToastProvider, ToastRequest, ToastStack};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    config_dir: Option<PathBuf>,
    provider: ToastProvider,
    toasts: ToastStack,
    tick_interval: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("toasts", &self.toasts.len())
            .field("tick_interval", &self.tick_interval)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_config(i18n: I18n, config: config::Config, config_dir: Option<PathBuf>) -> Self {
        let provider = ToastProvider::with_default_duration(config.default_duration());
        let toasts = ToastStack::new(provider.handle());
        let tick_interval = config.tick_interval();
        Self {
            i18n,
            config,
            config_dir,
            provider,
            toasts,
            tick_interval,
        }
    }

    /// Initializes application state from CLI flags and the settings file.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_error) = match config::load(config_dir.as_deref()) {
            Ok(config) => (config, None),
            Err(err) => (config::Config::default(), Some(err)),
        };

        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting toast demo");

        let mut app = Self::with_config(i18n, config, config_dir);

        if let Some(err) = config_error {
            tracing::warn!(error = %err, "failed to load settings");
            app.provider.handle().add_toast(ToastRequest::warning(
                app.i18n.tr("notification-config-load-error"),
            ));
            app.toasts.refresh(Instant::now());
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let _scope = self.provider.enter();

        match message {
            Message::Demo(kind) => {
                if let Err(err) = demo::trigger(kind, &self.i18n) {
                    tracing::error!(error = %err, ?kind, "demo toast not shown");
                }
                self.toasts.refresh(Instant::now());
            }
            Message::Toast(toast_message) => {
                self.toasts.update(toast_message, Instant::now());
            }
            Message::Tick(now) => {
                self.toasts.tick(now);
            }
            Message::LanguageSelected(locale) => {
                self.apply_language_change(locale);
            }
        }

        Task::none()
    }

    /// Switches the UI language and persists it to `settings.toml`.
    fn apply_language_change(&mut self, locale: LanguageIdentifier) {
        self.i18n.set_locale(locale);
        self.config.language = Some(self.i18n.current_locale().to_string());
        tracing::info!(locale = %self.i18n.current_locale(), "language changed");

        if let Err(err) = config::save(&self.config, self.config_dir.as_deref()) {
            tracing::warn!(error = %err, "failed to save settings");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_pending_timers(), self.tick_interval)
    }

    /// The toast overlay state.
    #[must_use]
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }
}
