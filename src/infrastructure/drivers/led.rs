use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use peripheral_poller::LedOutput;

/// Indicator LED on a push-pull GPIO
pub struct EspLed<'d> {
    pin: Output<'d>,
}

impl<'d> EspLed<'d> {
    /// Configure `pin` as an output, driven low
    pub fn new(pin: impl OutputPin + 'd) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl LedOutput for EspLed<'_> {
    fn set_level(&mut self, on: bool) {
        self.pin.set_level(Level::from(on));
    }
}
