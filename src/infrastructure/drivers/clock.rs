use embassy_time::Instant;

use peripheral_poller::MonotonicClock;

/// Milliseconds since boot from the esp-rtos time driver
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
