// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Entry` record, the `ToastRequest` callers hand to
//! the manager, and the `Category` enum that drives default titles and
//! visual treatment.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates a new, never reused toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity classification of a toast.
///
/// Unknown categories are kept verbatim in `Other`; they only affect
/// rendering, where they fall back to the warning treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Success,
    Warning,
    Danger,
    Other(String),
}

impl Category {
    /// Visual treatment used to render this category.
    #[must_use]
    pub fn treatment(&self) -> Treatment {
        match self {
            Category::Success => Treatment::Success,
            Category::Danger => Treatment::Danger,
            Category::Warning | Category::Other(_) => Treatment::Warning,
        }
    }

    /// i18n key of the title shown when the caller supplied none.
    ///
    /// Unknown categories have no default title.
    #[must_use]
    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            Category::Success => Some("toast-title-success"),
            Category::Warning => Some("toast-title-warning"),
            Category::Danger => Some("toast-title-danger"),
            Category::Other(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Danger => "danger",
            Category::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        match name {
            "success" => Category::Success,
            "warning" => Category::Warning,
            "danger" => Category::Danger,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Success,
    Warning,
    Danger,
}

impl Treatment {
    /// Background color of the toast card.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Treatment::Success => palette::TOAST_SUCCESS,
            Treatment::Warning => palette::TOAST_WARNING,
            Treatment::Danger => palette::TOAST_DANGER,
        }
    }

    /// Glyph drawn in front of the title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Treatment::Success => "✔",
            Treatment::Warning => "⚠",
            Treatment::Danger => "⊘",
        }
    }
}

/// What a caller asks the manager to show.
///
/// `duration` left unset means "use the manager's default"; a zero duration
/// keeps the toast until it is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub category: Category,
    pub title: Option<String>,
    pub message: String,
    pub duration: Option<Duration>,
}

impl ToastRequest {
    pub fn new(category: impl Into<Category>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            title: None,
            message: message.into(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Category::Danger, message)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss for this toast.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }
}

/// A toast currently held by the manager. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: ToastId,
    category: Category,
    title: Option<String>,
    message: String,
    duration: Duration,
}

impl Entry {
    pub(crate) fn from_request(request: ToastRequest, default_duration: Duration) -> Self {
        Self {
            id: ToastId::new(),
            category: request.category,
            title: request.title,
            message: request.message,
            duration: request.duration.unwrap_or(default_duration),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The caller supplied title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stored duration; zero means "never auto-dismiss".
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Delay after which the toast dismisses itself, if it does.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        Some(self.duration).filter(|d| !d.is_zero())
    }

    /// Same toast with a different duration, for exercising re-render paths.
    #[cfg(test)]
    pub(crate) fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX_SECONDS: Duration = Duration::from_millis(6000);

    #[test]
    fn toast_ids_are_unique() {
        let a = Entry::from_request(ToastRequest::success("test"), SIX_SECONDS);
        let b = Entry::from_request(ToastRequest::success("test"), SIX_SECONDS);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn category_parses_known_names() {
        assert_eq!(Category::from("success"), Category::Success);
        assert_eq!(Category::from("warning"), Category::Warning);
        assert_eq!(Category::from("danger"), Category::Danger);
    }

    #[test]
    fn unknown_category_is_preserved() {
        let category = Category::from("info");
        assert_eq!(category, Category::Other("info".to_string()));
        assert_eq!(category.as_str(), "info");
    }

    #[test]
    fn unknown_category_renders_as_warning_without_title() {
        let category = Category::from("info");
        assert_eq!(category.treatment(), Treatment::Warning);
        assert_eq!(category.title_key(), None);
    }

    #[test]
    fn treatment_colors_are_distinct() {
        let success = Treatment::Success.color();
        let warning = Treatment::Warning.color();
        let danger = Treatment::Danger.color();

        assert_ne!(success, warning);
        assert_ne!(success, danger);
        assert_ne!(warning, danger);
    }

    #[test]
    fn request_without_duration_takes_default() {
        let entry = Entry::from_request(ToastRequest::success("saved"), SIX_SECONDS);
        assert_eq!(entry.duration(), SIX_SECONDS);
        assert_eq!(entry.auto_dismiss(), Some(SIX_SECONDS));
    }

    #[test]
    fn sticky_request_never_auto_dismisses() {
        let entry = Entry::from_request(ToastRequest::danger("failed").sticky(), SIX_SECONDS);
        assert_eq!(entry.duration(), Duration::ZERO);
        assert_eq!(entry.auto_dismiss(), None);
    }

    #[test]
    fn request_builder_pattern_works() {
        let request = ToastRequest::new("warning", "careful")
            .title("Heads up")
            .duration(Duration::from_millis(10_000));

        assert_eq!(request.category, Category::Warning);
        assert_eq!(request.title.as_deref(), Some("Heads up"));
        assert_eq!(request.message, "careful");
        assert_eq!(request.duration, Some(Duration::from_millis(10_000)));
    }

    #[test]
    fn request_constructors_set_correct_category() {
        assert_eq!(ToastRequest::success("").category, Category::Success);
        assert_eq!(ToastRequest::warning("").category, Category::Warning);
        assert_eq!(ToastRequest::danger("").category, Category::Danger);
    }
}
