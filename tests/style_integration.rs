// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_toasts::config::Config;
    use iced_toasts::i18n::fluent::I18n;
    use iced_toasts::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_toasts::ui::toasts::{Category, ToastProvider, ToastRequest, ToastStack, Treatment};
    use std::time::Instant;

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::TOAST_SUCCESS;
        let _ = palette::TOAST_TEXT;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn categories_map_to_their_treatments() {
        assert_eq!(Category::Success.treatment().color(), palette::TOAST_SUCCESS);
        assert_eq!(Category::Warning.treatment().color(), palette::TOAST_WARNING);
        assert_eq!(Category::Danger.treatment().color(), palette::TOAST_DANGER);
        assert_eq!(
            Category::from("unknown").treatment(),
            Treatment::Warning
        );
    }

    #[test]
    fn overlay_view_builds_for_every_category() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let provider = ToastProvider::new();
        let handle = provider.handle();
        let mut stack = ToastStack::new(handle.clone());

        handle.add_toast(ToastRequest::success("ok"));
        handle.add_toast(ToastRequest::warning("careful"));
        handle.add_toast(ToastRequest::danger("failed").title("Error"));
        handle.add_toast(ToastRequest::new("mystery", "fallback"));
        stack.refresh(Instant::now());

        // Smoke-test that the overlay renders every toast without panicking
        let _ = stack.view(&i18n);
        assert_eq!(stack.len(), 4);
    }
}
