// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering the manager's collection.
//!
//! The stack mirrors the manager: every entry has exactly one mounted
//! toast, in collection order. Entries that leave the collection are
//! unmounted, which drops their timers before they can fire.

use super::entry::ToastId;
use super::provider::ToastHandle;
use super::toast::{Message, MountedToast};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug)]
pub struct ToastStack {
    handle: ToastHandle,
    mounted: Vec<MountedToast>,
}

impl ToastStack {
    /// Creates an empty stack removing toasts through `handle`.
    #[must_use]
    pub fn new(handle: ToastHandle) -> Self {
        Self {
            handle,
            mounted: Vec::new(),
        }
    }

    /// Reconciles the mounted toasts with the manager's current collection.
    pub fn refresh(&mut self, now: Instant) {
        let mut previous: HashMap<ToastId, MountedToast> = self
            .mounted
            .drain(..)
            .map(|toast| (toast.id(), toast))
            .collect();

        self.mounted = self
            .handle
            .toasts()
            .into_iter()
            .map(|entry| match previous.remove(&entry.id()) {
                Some(mut toast) => {
                    toast.sync(&entry, now);
                    toast
                }
                None => {
                    tracing::debug!(id = %entry.id(), "toast mounted");
                    MountedToast::mount(entry, now)
                }
            })
            .collect();

        for id in previous.into_keys() {
            tracing::debug!(%id, "toast unmounted");
        }
    }

    /// Handles a message emitted by one of the rendered toasts.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.handle.remove_toast(id);
            }
        }
        self.refresh(now);
    }

    /// Fires due timers and removes their toasts.
    ///
    /// Returns the ids dismissed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let due: Vec<ToastId> = self
            .mounted
            .iter_mut()
            .filter_map(|toast| toast.poll(now))
            .map(|Message::Dismiss(id)| id)
            .collect();

        if !due.is_empty() {
            for id in &due {
                self.handle.remove_toast(*id);
            }
            self.refresh(now);
        }
        due
    }

    /// Whether any mounted toast still waits on its timer.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.mounted.iter().any(MountedToast::has_pending_timer)
    }

    /// Mounted toasts, oldest first.
    pub fn mounted(&self) -> impl Iterator<Item = &MountedToast> {
        self.mounted.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Renders the overlay: toasts stacked top to bottom in collection
    /// order, anchored to the bottom center of the window.
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = self
            .mounted
            .iter()
            .map(|toast| toast.view(i18n))
            .collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}
