// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Application code asks for transient success, warning or danger messages;
//! they are shown stacked at the bottom of the window and go away after a
//! timeout or when the user closes them.
//!
//! # Components
//!
//! - [`entry`] - `Entry`, `ToastRequest` and the `Category` classification
//! - [`manager`] - `Manager`, the ordered collection of active toasts
//! - [`provider`] - `ToastProvider` and [`use_toast`] for ambient access
//! - [`timer`] - `DismissTimer`, the per-toast auto-dismiss deadline
//! - [`toast`] - `MountedToast`, rendering of a single toast
//! - [`stack`] - `ToastStack`, the overlay wiring toasts back to the manager
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::toasts::{use_toast, ToastProvider, ToastRequest, ToastStack};
//!
//! let provider = ToastProvider::new();
//! let mut stack = ToastStack::new(provider.handle());
//!
//! // Anywhere inside the provider scope
//! provider.scope(|| -> iced_toasts::error::Result<()> {
//!     use_toast()?.add_toast(ToastRequest::success("Image saved").title("Saved"));
//!     Ok(())
//! })?;
//!
//! // Mount the new toast, then render the overlay
//! stack.refresh(Instant::now());
//! let overlay = stack.view(&i18n).map(Message::Toast);
//! ```

pub mod entry;
pub mod manager;
pub mod provider;
pub mod stack;
pub mod timer;
pub mod toast;

pub use entry::{Category, Entry, ToastId, ToastRequest, Treatment};
pub use manager::Manager;
pub use provider::{use_toast, ProviderScope, ToastHandle, ToastProvider};
pub use stack::ToastStack;
pub use timer::DismissTimer;
pub use toast::{Message, MountedToast, Role, ToastContent};
