//! Phase sequencer module for stepper-phase.
//!
//! Owns per-axis phase state and translates step/direction intents into the
//! lookup-table-driven output codes of the SMC800-class driver chip.

mod axis;
mod driver;
mod level;
mod port;
pub mod tables;

pub use axis::{AxisPhaseState, StepMode};
pub use driver::{DriverOptions, PhaseSequencer, DEFAULT_AXIS_ADDRESS};
pub use level::{EnableLevel, MAX_THRESHOLD, MID_THRESHOLD};
pub use port::OutputPort;

/// Number of axes this driver chip can address.
pub const SMC_AXES: usize = 3;
