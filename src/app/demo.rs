// SPDX-License-Identifier: MPL-2.0
//! Preset toasts fired by the demo screen.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::toasts::{use_toast, ToastId, ToastRequest};
use std::time::Duration;

/// Duration of the "custom duration" preset.
pub const CUSTOM_DURATION: Duration = Duration::from_millis(10_000);

/// The four presets offered by the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoToast {
    Success,
    Warning,
    Error,
    CustomDuration,
}

impl DemoToast {
    pub const ALL: [DemoToast; 4] = [
        DemoToast::Success,
        DemoToast::Warning,
        DemoToast::Error,
        DemoToast::CustomDuration,
    ];

    /// i18n key of the button that fires this preset.
    #[must_use]
    pub fn button_key(self) -> &'static str {
        match self {
            DemoToast::Success => "demo-button-success",
            DemoToast::Warning => "demo-button-warning",
            DemoToast::Error => "demo-button-error",
            DemoToast::CustomDuration => "demo-button-custom-duration",
        }
    }
}

/// Builds the request a preset sends to the toast manager.
#[must_use]
pub fn demo_request(kind: DemoToast, i18n: &I18n) -> ToastRequest {
    match kind {
        DemoToast::Success => ToastRequest::success(i18n.tr("demo-success-message"))
            .title(i18n.tr("demo-success-title")),
        DemoToast::Warning => ToastRequest::warning(i18n.tr("demo-warning-message"))
            .title(i18n.tr("demo-warning-title")),
        DemoToast::Error => ToastRequest::danger(i18n.tr("demo-error-message"))
            .title(i18n.tr("demo-error-title")),
        DemoToast::CustomDuration => {
            ToastRequest::success(i18n.tr("demo-custom-duration-message"))
                .title(i18n.tr("demo-custom-duration-title"))
                .duration(CUSTOM_DURATION)
        }
    }
}

/// Fires a preset through the ambient toast provider.
///
/// # Errors
///
/// Fails with [`crate::error::Error::OutsideProvider`] when called outside a
/// provider scope.
pub fn trigger(kind: DemoToast, i18n: &I18n) -> Result<ToastId> {
    let toasts = use_toast()?;
    Ok(toasts.add_toast(demo_request(kind, i18n)))
}
