use peripheral_poller::PollerConfig;

pub(crate) struct FirmwareConfig {
    pub version: &'static str,
}

pub(crate) const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

/// UART0 console speed, same as the ROM bootloader
pub const CONSOLE_BAUD_RATE: u32 = 115_200;

/// Devkit pinout from `PollerConfig::new()`. The `*_gpio!` macros below
/// select the same pins.
pub const POLLER: PollerConfig = PollerConfig::new().with_version(FIRMWARE.version);

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}

#[macro_export]
macro_rules! adc_gpio {
    ($p:expr) => {
        $p.GPIO34
    };
}

#[macro_export]
macro_rules! touch_gpio {
    ($p:expr) => {
        $p.GPIO4
    };
}

#[macro_export]
macro_rules! console_tx_gpio {
    ($p:expr) => {
        $p.GPIO1
    };
}
