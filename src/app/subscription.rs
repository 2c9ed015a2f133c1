// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Idle when no mounted toast has a pending timer.
pub fn create_tick_subscription(
    has_pending_timers: bool,
    interval: Duration,
) -> Subscription<Message> {
    if has_pending_timers {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
