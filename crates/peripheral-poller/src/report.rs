//! Console reports

use core::fmt;

/// One line of console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report<'a> {
    /// Startup banner
    Banner { version: &'a str },
    /// Pins are configured
    PinsReady,
    /// Raw ADC reading
    Analog { gpio: u8, value: u16 },
    /// Raw touch reading
    Touch { gpio: u8, value: u16 },
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Banner { version } => {
                write!(f, "ESP32 Universal Test Firmware ({})", version)
            }
            Report::PinsReady => f.write_str("Test pins setup complete"),
            Report::Analog { gpio, value } => write!(f, "ADC (GPIO {}): {}", gpio, value),
            Report::Touch { gpio, value } => write!(f, "Touch (GPIO {}): {}", gpio, value),
        }
    }
}
