//! Supervisory control module for stepper-phase.
//!
//! Layers hold/resume/kill arbitration and board-specific tool dispatch
//! over the motion engine's lifecycle.

mod board;
mod control;
mod inputs;
mod mode;

pub use board::ControlBoard;
pub use control::{Supervisor, HOMING_FEED_FAST, HOMING_FEED_SLOW};
pub use inputs::SignalInput;
pub use mode::ControlMode;
