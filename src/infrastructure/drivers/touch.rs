use esp_hal::Blocking;
use esp_hal::peripherals::{GPIO4, TOUCH};
use esp_hal::touch::{Continuous, Touch, TouchPad};

use peripheral_poller::TouchInput;

/// Capacitive touch pad on GPIO4 (touch channel 0)
///
/// The peripheral runs in continuous mode, so a read returns the latest
/// finished measurement. Lower values mean a closer touch.
pub struct EspTouchInput<'d> {
    _touch: Touch<'d, Continuous, Blocking>,
    pad: TouchPad<GPIO4<'d>, Continuous, Blocking>,
}

impl<'d> EspTouchInput<'d> {
    pub fn new(touch: TOUCH<'d>, gpio: GPIO4<'d>) -> Self {
        let touch = Touch::continuous_mode(touch, None);
        let pad = TouchPad::new(gpio, &touch);
        Self { _touch: touch, pad }
    }
}

impl TouchInput for EspTouchInput<'_> {
    fn read_touch(&mut self) -> u16 {
        self.pad.read()
    }
}
