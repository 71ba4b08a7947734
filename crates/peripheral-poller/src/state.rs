//! Blink timer state

/// Mutable state owned by the poller.
///
/// Starts as `{ last_toggle_ms: 0, led_on: false }` and is only changed by
/// [`PollerState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollerState {
    /// Timestamp (ms since boot) of the last LED toggle
    pub last_toggle_ms: u64,
    /// Current LED output level
    pub led_on: bool,
}

impl PollerState {
    pub const fn new() -> Self {
        Self {
            last_toggle_ms: 0,
            led_on: false,
        }
    }

    /// Advance the blink timer to `now_ms`.
    ///
    /// Returns the new LED level if at least `interval_ms` passed since the
    /// last toggle, `None` otherwise. Toggles at most once per call, however
    /// much time has passed.
    pub fn advance(&mut self, now_ms: u64, interval_ms: u64) -> Option<bool> {
        if now_ms.wrapping_sub(self.last_toggle_ms) < interval_ms {
            return None;
        }
        self.last_toggle_ms = now_ms;
        self.led_on = !self.led_on;
        Some(self.led_on)
    }
}
