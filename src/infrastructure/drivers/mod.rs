mod adc;
mod clock;
mod console;
mod led;
mod touch;

pub use adc::EspAnalogInput;
pub use clock::EmbassyClock;
pub use console::UartConsole;
pub use led::EspLed;
pub use touch::EspTouchInput;
