// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo panel sits underneath; the toast overlay is layered on top of it.

use super::demo::DemoToast;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::toasts::ToastStack;
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a ToastStack,
}

/// Renders the demo panel with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = ctx.toasts.view(ctx.i18n).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_demo(ctx.i18n))
        .push(overlay)
        .into()
}

fn view_demo(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("demo-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_900);

    let buttons = DemoToast::ALL.into_iter().fold(
        Column::new().spacing(spacing::MD),
        |column, kind| column.push(demo_button(kind, i18n)),
    );

    let panel = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(buttons)
            .push(view_languages(i18n)),
    )
    .width(Length::Fill)
    .max_width(sizing::DEMO_PANEL_WIDTH)
    .padding(spacing::LG)
    .style(panel_style);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XXL)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            ..Default::default()
        })
        .into()
}

fn demo_button(kind: DemoToast, i18n: &I18n) -> Element<'_, Message> {
    let label = text(i18n.tr(kind.button_key()))
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(label)
        .on_press(Message::Demo(kind))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(demo_button_style(demo_color(kind)))
        .into()
}

fn view_languages(i18n: &I18n) -> Element<'_, Message> {
    let buttons = i18n.available_locales.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, locale| row.push(language_button(locale, i18n)),
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("demo-language-label")).size(typography::BODY))
        .push(buttons)
        .into()
}

fn language_button<'a>(locale: &LanguageIdentifier, i18n: &I18n) -> Element<'a, Message> {
    let mut language = button(text(language_label(locale, i18n)).size(typography::BODY))
        .on_press(Message::LanguageSelected(locale.clone()))
        .padding([spacing::XXS, spacing::SM]);

    if i18n.current_locale() == locale {
        language = language.style(button::primary);
    } else {
        language = language.style(button::secondary);
    }

    language.into()
}

/// Localized language name, or the raw locale when no name is translated.
fn language_label(locale: &LanguageIdentifier, i18n: &I18n) -> String {
    let translated = i18n.tr(&format!("language-name-{}", locale));
    if translated.starts_with("MISSING:") {
        locale.to_string()
    } else {
        translated
    }
}

fn demo_color(kind: DemoToast) -> Color {
    match kind {
        DemoToast::Success => palette::SUCCESS_500,
        DemoToast::Warning => palette::WARNING_500,
        DemoToast::Error => palette::ERROR_500,
        DemoToast::CustomDuration => palette::INFO_500,
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

fn demo_button_style(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_STRONG,
                ..color
            },
            button::Status::Active | button::Status::Disabled => color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_buttons_have_distinct_colors() {
        let colors: Vec<Color> = DemoToast::ALL.into_iter().map(demo_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn language_labels_fall_back_to_locale() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        assert_eq!(language_label(&"fr".parse().unwrap(), &i18n), "Français");
        assert_eq!(language_label(&"de".parse().unwrap(), &i18n), "de");
    }

    #[test]
    fn demo_button_dims_on_hover() {
        let style = demo_button_style(palette::SUCCESS_500);
        let idle = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }
}
