//! Fixed delays for every timer-driven behavior.
//!
//! None of these timers carry a cancellation token. In particular a second
//! submit inside [`SUBMIT_RESTORE_DELAY`] races with the stale restore from
//! the first; that is a known quirk of the page being replaced and is kept
//! rather than silently redesigned.

use core::time::Duration;

/// How long an alert stays fully visible before fading.
pub const ALERT_DISMISS_DELAY: Duration = Duration::from_millis(5000);
/// Fade window between `opacity: 0` and removal from the page.
pub const ALERT_FADE_DURATION: Duration = Duration::from_millis(300);
/// Unconditional re-enable of a submit button after submit feedback.
pub const SUBMIT_RESTORE_DELAY: Duration = Duration::from_millis(3000);
/// Period of the cosmetic balance pulse.
pub const BALANCE_PULSE_PERIOD: Duration = Duration::from_millis(30_000);
/// How long the balance stays scaled up within one pulse.
pub const BALANCE_PULSE_HOLD: Duration = Duration::from_millis(200);
/// How long the "Copied!" feedback stays on a copy button.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);
