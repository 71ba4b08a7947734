//! Pin assignment and timing

/// Interval between LED toggles
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 5000;

/// Blocking pause at the end of every poll
pub const DEFAULT_LOOP_PAUSE_MS: u32 = 1000;

/// Poller configuration
///
/// GPIO numbers are used to label console output; the board layer is
/// responsible for wiring the matching pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    pub led_gpio: u8,
    pub adc_gpio: u8,
    pub touch_gpio: u8,
    pub blink_interval_ms: u64,
    pub loop_pause_ms: u32,
    /// Firmware version printed in the startup banner
    pub version: &'static str,
}

impl PollerConfig {
    /// Devkit defaults: LED on GPIO2, ADC on GPIO34, touch on GPIO4
    pub const fn new() -> Self {
        Self {
            led_gpio: 2,
            adc_gpio: 34,
            touch_gpio: 4,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            loop_pause_ms: DEFAULT_LOOP_PAUSE_MS,
            version: "dev",
        }
    }

    #[must_use]
    pub const fn with_led_gpio(mut self, gpio: u8) -> Self {
        self.led_gpio = gpio;
        self
    }

    #[must_use]
    pub const fn with_adc_gpio(mut self, gpio: u8) -> Self {
        self.adc_gpio = gpio;
        self
    }

    #[must_use]
    pub const fn with_touch_gpio(mut self, gpio: u8) -> Self {
        self.touch_gpio = gpio;
        self
    }

    #[must_use]
    pub const fn with_blink_interval_ms(mut self, interval_ms: u64) -> Self {
        self.blink_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub const fn with_loop_pause_ms(mut self, pause_ms: u32) -> Self {
        self.loop_pause_ms = pause_ms;
        self
    }

    #[must_use]
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new()
    }
}
