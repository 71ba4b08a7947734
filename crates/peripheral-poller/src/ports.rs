//! Hardware ports
//!
//! Implement these traits to run the poller on a board. Reads are
//! infallible: whatever the platform returns is reported as is.

use crate::report::Report;

/// Digital output driving the indicator LED
pub trait LedOutput {
    /// Drive the pin high (`true`) or low (`false`)
    fn set_level(&mut self, on: bool);
}

/// Analog input sampled once per poll
pub trait AnalogInput {
    /// Take one raw conversion
    fn read_analog(&mut self) -> u16;
}

/// Capacitive touch input sampled once per poll
pub trait TouchInput {
    /// Take one raw touch measurement
    fn read_touch(&mut self) -> u16;
}

/// Monotonic clock, milliseconds since boot
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

/// Diagnostic console
pub trait ReportSink {
    /// Write one report as a console line
    fn emit(&mut self, report: &Report<'_>);
}
