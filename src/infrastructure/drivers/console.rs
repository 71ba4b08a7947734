use core::fmt::Write as _;

use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::UART0;
use esp_hal::uart::{Config, ConfigError, Uart};

use peripheral_poller::{Report, ReportSink};

/// Line-oriented diagnostic console on UART0
pub struct UartConsole<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> UartConsole<'d> {
    pub fn new(
        uart0: UART0<'d>,
        tx: impl PeripheralOutput<'d>,
        baud_rate: u32,
    ) -> Result<Self, ConfigError> {
        let config = Config::default().with_baudrate(baud_rate);
        let uart = Uart::new(uart0, config)?.with_tx(tx);
        Ok(Self { uart })
    }
}

impl ReportSink for UartConsole<'_> {
    fn emit(&mut self, report: &Report<'_>) {
        // Write errors are ignored
        let _ = write!(self.uart, "{}\r\n", report);
    }
}
