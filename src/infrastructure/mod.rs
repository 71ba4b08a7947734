//! Infrastructure layer - Port implementations
//!
//! Concrete implementations of the poller ports on top of esp-hal and
//! embassy-time.

pub mod drivers;
