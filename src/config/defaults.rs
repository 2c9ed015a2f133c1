// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration applied when a request names none
//! - **Tick**: Polling interval of the auto-dismiss timers

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Auto-dismiss delay applied to toasts that do not specify one (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 6000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default interval between auto-dismiss checks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_duration_default_is_six_seconds() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 6000);
    }

    #[test]
    fn tick_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 100);
        assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
        assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    }
}
