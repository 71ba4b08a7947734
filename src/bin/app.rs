//! Test Node Firmware
//!
//! Host runtime for the peripheral poller:
//! - Brings up the chip, time driver and console
//! - Wires the LED, ADC and touch pins into the poller
//! - Calls `setup` once, then `poll` forever

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Delay;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use esp_test_node::config::{CONSOLE_BAUD_RATE, POLLER};
use esp_test_node::infrastructure::drivers::{
    EmbassyClock, EspAnalogInput, EspLed, EspTouchInput, UartConsole,
};
use esp_test_node::{adc_gpio, console_tx_gpio, led_gpio, touch_gpio};
use peripheral_poller::{Poller, PollerPorts};

esp_bootloader_esp_idf::esp_app_desc!();

/// Server handle passed to the poller. This build runs no server.
type HostServer = ();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos, it drives embassy-time
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let console = UartConsole::new(
        peripherals.UART0,
        console_tx_gpio!(peripherals),
        CONSOLE_BAUD_RATE,
    )
    .expect("Failed to configure console UART");

    let ports = PollerPorts {
        led: EspLed::new(led_gpio!(peripherals)),
        adc: EspAnalogInput::new(peripherals.ADC1, adc_gpio!(peripherals)),
        touch: EspTouchInput::new(peripherals.TOUCH, touch_gpio!(peripherals)),
        clock: EmbassyClock,
        delay: Delay,
        console,
    };
    let mut poller = Poller::new(POLLER, ports);

    poller.setup(None::<&mut HostServer>);
    log::info!("host: console at {} baud, entering poll loop", CONSOLE_BAUD_RATE);

    // Super-loop: poll blocks for the loop pause, nothing else runs
    loop {
        poller.poll(None::<&mut HostServer>);
    }
}
