//! Time subsystem.
//!
//! Tick counters used for `get_ticks` and input delays. Real backends use a
//! `SystemClock`; headless runs use a `ManualClock` advanced by the caller.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
