use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO34};

use peripheral_poller::AnalogInput;

/// Reading reported when a conversion fails, as the board SDK does
const FAILED_CONVERSION: u16 = 0;

/// Oneshot ADC1 reader on GPIO34
///
/// 11 dB attenuation covers the full 0..3.3 V range, raw readings are
/// 12-bit (0..4095).
pub struct EspAnalogInput<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO34<'d>, ADC1<'d>>,
}

impl<'d> EspAnalogInput<'d> {
    pub fn new(adc1: ADC1<'d>, gpio: GPIO34<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);
        Self { adc, pin }
    }
}

impl AnalogInput for EspAnalogInput<'_> {
    fn read_analog(&mut self) -> u16 {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).unwrap_or(FAILED_CONVERSION)
    }
}
