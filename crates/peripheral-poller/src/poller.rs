//! Peripheral poller
//!
//! The host runtime calls [`Poller::setup`] once and then [`Poller::poll`]
//! forever. Each poll:
//! 1. reads the clock and toggles the LED if the blink interval elapsed
//! 2. samples the ADC pin and prints the reading
//! 3. samples the touch pin and prints the reading
//! 4. blocks for the loop pause
//!
//! Both entry points accept the host's server handle and ignore it: the
//! poller has no behavioral coupling to the server.

use embedded_hal::delay::DelayNs;

use crate::config::PollerConfig;
use crate::ports::{AnalogInput, LedOutput, MonotonicClock, ReportSink, TouchInput};
use crate::report::Report;
use crate::state::PollerState;

/// Hardware the poller drives
pub struct PollerPorts<L, A, T, C, D, R> {
    pub led: L,
    pub adc: A,
    pub touch: T,
    pub clock: C,
    pub delay: D,
    pub console: R,
}

pub struct Poller<L, A, T, C, D, R> {
    ports: PollerPorts<L, A, T, C, D, R>,
    config: PollerConfig,
    state: PollerState,
}

impl<L, A, T, C, D, R> Poller<L, A, T, C, D, R>
where
    L: LedOutput,
    A: AnalogInput,
    T: TouchInput,
    C: MonotonicClock,
    D: DelayNs,
    R: ReportSink,
{
    pub fn new(config: PollerConfig, ports: PollerPorts<L, A, T, C, D, R>) -> Self {
        Self {
            ports,
            config,
            state: PollerState::new(),
        }
    }

    /// One-time initialization.
    ///
    /// Prints the startup banner, drives the LED low and resets the blink
    /// timer, whatever state the poller was in before.
    pub fn setup<S: ?Sized>(&mut self, _server: Option<&mut S>) {
        self.ports.console.emit(&Report::Banner {
            version: self.config.version,
        });

        self.state = PollerState::new();
        self.ports.led.set_level(self.state.led_on);

        self.ports.console.emit(&Report::PinsReady);
        log::info!(
            "poller: led=GPIO{} adc=GPIO{} touch=GPIO{} blink={}ms pause={}ms",
            self.config.led_gpio,
            self.config.adc_gpio,
            self.config.touch_gpio,
            self.config.blink_interval_ms,
            self.config.loop_pause_ms,
        );
    }

    /// One pass of the polling loop. Returns after the loop pause.
    pub fn poll<S: ?Sized>(&mut self, _server: Option<&mut S>) {
        let now_ms = self.ports.clock.now_ms();
        if let Some(on) = self.state.advance(now_ms, self.config.blink_interval_ms) {
            self.ports.led.set_level(on);
            log::debug!("poller: led {} at {} ms", if on { "on" } else { "off" }, now_ms);
        }

        let value = self.ports.adc.read_analog();
        self.ports.console.emit(&Report::Analog {
            gpio: self.config.adc_gpio,
            value,
        });

        let value = self.ports.touch.read_touch();
        self.ports.console.emit(&Report::Touch {
            gpio: self.config.touch_gpio,
            value,
        });

        self.ports.delay.delay_ms(self.config.loop_pause_ms);
    }

    pub fn state(&self) -> &PollerState {
        &self.state
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn ports(&self) -> &PollerPorts<L, A, T, C, D, R> {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut PollerPorts<L, A, T, C, D, R> {
        &mut self.ports
    }
}
