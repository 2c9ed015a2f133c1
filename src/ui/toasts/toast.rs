// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual entries.
//!
//! A `MountedToast` is the on-screen counterpart of one `Entry`. It owns the
//! auto-dismiss timer for as long as it stays mounted and turns both the
//! timer and the close button into a `Message::Dismiss` for its id.

use super::entry::{Entry, ToastId, Treatment};
use super::timer::DismissTimer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, tooltip, Column, Container, Row};
use iced::{alignment, font, Background, Border, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Remove the toast with this id, either from its close button or its timer.
    Dismiss(ToastId),
}

/// Assistive-technology role announced for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Alert,
}

/// Everything a toast shows, resolved for the current locale.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub role: Role,
    pub title: String,
    pub message: String,
    pub close_label: String,
    pub treatment: Treatment,
}

/// A toast currently mounted in the stack.
#[derive(Debug)]
pub struct MountedToast {
    entry: Entry,
    timer: Option<DismissTimer>,
}

impl MountedToast {
    /// Mounts `entry`, arming its auto-dismiss timer if it has a duration.
    #[must_use]
    pub fn mount(entry: Entry, now: Instant) -> Self {
        let timer = arm(&entry, now);
        Self { entry, timer }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.entry.id()
    }

    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Re-renders with `entry`. A changed duration restarts the timer from `now`.
    pub fn sync(&mut self, entry: &Entry, now: Instant) {
        if entry.duration() != self.entry.duration() {
            tracing::debug!(id = %entry.id(), "toast duration changed, restarting timer");
            self.timer = arm(entry, now);
        }
        self.entry = entry.clone();
    }

    /// Fires the timer once it is due. The timer is consumed, so this
    /// yields at most one dismissal per arming.
    pub fn poll(&mut self, now: Instant) -> Option<Message> {
        if self.timer.is_some_and(|timer| timer.is_due(now)) {
            self.timer = None;
            Some(Message::Dismiss(self.id()))
        } else {
            None
        }
    }

    /// Dismissal requested by the close control, regardless of the timer.
    #[must_use]
    pub fn close(&self) -> Message {
        Message::Dismiss(self.id())
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Resolves the displayed text and treatment.
    ///
    /// A supplied non-empty title always wins; otherwise known categories get their
    /// localized default title and unknown ones get none.
    #[must_use]
    pub fn content(&self, i18n: &I18n) -> ToastContent {
        let category = self.entry.category();
        let title = match self.entry.title().filter(|title| !title.is_empty()) {
            Some(title) => title.to_string(),
            None => category.title_key().map(|key| i18n.tr(key)).unwrap_or_default(),
        };

        ToastContent {
            role: Role::Alert,
            title,
            message: self.entry.message().to_string(),
            close_label: i18n.tr("toast-close-label"),
            treatment: category.treatment(),
        }
    }

    /// Renders the toast card: [glyph] [title / message] [close].
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let content = self.content(i18n);
        let treatment = content.treatment;

        let glyph = text(treatment.glyph())
            .size(sizing::ICON_MD)
            .color(palette::TOAST_TEXT);

        let title = text(content.title).size(typography::BODY_LG).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });
        let message = text(content.message).size(typography::BODY);

        let close_button = button(text("✕").size(sizing::ICON_SM))
            .on_press(self.close())
            .padding(spacing::XXS)
            .style(close_button_style);
        let close = tooltip::Tooltip::new(
            close_button,
            text(content.close_label).size(typography::BODY),
            tooltip::Position::Left,
        )
        .gap(spacing::XXS)
        .padding(spacing::XXS)
        .style(container::rounded_box);

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(glyph)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title)
                    .push(message),
            )
            .push(close);

        Container::new(body)
            .width(Length::Fill)
            .max_width(sizing::TOAST_WIDTH)
            .padding(spacing::MD)
            .style(move |theme: &Theme| toast_container_style(theme, treatment))
            .into()
    }
}

fn arm(entry: &Entry, now: Instant) -> Option<DismissTimer> {
    entry
        .auto_dismiss()
        .map(|duration| DismissTimer::start(duration, now))
}

/// Style function for the toast card.
fn toast_container_style(_theme: &Theme, treatment: Treatment) -> container::Style {
    container::Style {
        background: Some(Background::Color(treatment.color())),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::TOAST_TEXT),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::TOAST_TEXT,
        button::Status::Active | button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::TOAST_TEXT
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
