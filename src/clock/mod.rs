//! Game clock and real-time tick cadence.
//!
//! - `Clock` is the per-round countdown in whole seconds. It can be frozen
//!   until a monotonic instant and stops at zero.
//! - `TickCadence` converts monotonic readings from a `TimeSource` into
//!   whole one-second ticks.

pub mod cadence;
pub mod countdown;

pub use cadence::{ManualTime, MonotonicTime, TickCadence, TimeSource, TICK_INTERVAL};
pub use countdown::{Clock, ClockStatus, ClockTick};
