#![cfg_attr(not(test), no_std)]

//! Peripheral poller
//!
//! Hardware-agnostic core of the test node firmware:
//! - `state` - Blink timer state (last toggle time and LED level)
//! - `config` - Pin assignment and timing
//! - `ports` - Traits the board implements (LED, ADC, touch, clock, console)
//! - `report` - Console lines emitted by the poller
//! - `poller` - `setup` / `poll` entry points driven by the host runtime
//!
//! The poller is generic over the ports, so the same loop runs on the board
//! and against in-memory fakes.

pub mod config;
pub mod poller;
pub mod ports;
pub mod report;
pub mod state;

pub use config::PollerConfig;
pub use poller::{Poller, PollerPorts};
pub use ports::{AnalogInput, LedOutput, MonotonicClock, ReportSink, TouchInput};
pub use report::Report;
pub use state::PollerState;
