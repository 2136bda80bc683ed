//! Motion engine seam.
//!
//! The trajectory-planning motion engine is an external collaborator: it
//! decides per-tick step counts and owns acceleration profiles. This module
//! defines the narrow trait surface the driver and supervisory layers call
//! into, plus the tool and lifecycle-event vocabularies shared across it.

use crate::config::units::{StepRate, Steps};
use crate::error::HomingError;

/// Tool-control dispatch codes.
///
/// The named variants are the board-specific tools this core knows about;
/// `Other` is the open-ended range owned by the generic motion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tool {
    /// Spindle rotating clockwise.
    SpindleClockwise,
    /// Spindle rotating counter-clockwise.
    SpindleCounterClockwise,
    /// Touch probe input.
    Probe,
    /// Coolant output.
    Coolant,
    /// Controller cooling fan (level-controlled).
    ControllerFan,
    /// Engine-owned tool code.
    Other(u8),
}

/// Motion-engine lifecycle events forwarded to board-specific bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionEvent {
    /// Engine initialization completed.
    Initialized,
    /// A move has started.
    MoveStarted,
    /// A move has completed.
    MoveCompleted,
    /// An axis changed direction.
    DirectionChanged,
    /// The engine raised an error condition.
    Error,
}

/// Interface to the external motion engine.
///
/// The supervisory layer wraps an implementation of this trait and the
/// phase sequencer delegates bounded relative moves to it. Implementations
/// are expected to call [`PhaseSequencer::step`](crate::sequencer::PhaseSequencer::step)
/// from their timer-interrupt path.
pub trait MotionEngine {
    /// Perform the standard engine initialization sequence.
    fn init(&mut self);

    /// Engine mainline poll, invoked once per cycle before supervisory
    /// arbitration.
    fn poll(&mut self);

    /// Whether the engine is currently holding motion.
    fn is_hold(&self) -> bool;

    /// Pause in-progress motion without losing position.
    fn hold(&mut self);

    /// Continue motion previously paused by [`hold`](Self::hold).
    fn resume(&mut self);

    /// Halt all motion; the engine stays dead until external reset.
    fn kill(&mut self);

    /// Issue a relative move on the given axes at the given rate.
    ///
    /// `deltas` is indexed by axis; axes beyond its length do not move.
    fn move_relative(&mut self, rate: StepRate, deltas: &[Steps]);

    /// Drive one axis toward its reference sensor at the given rate.
    ///
    /// Returns an error if the sensor is not found within the axis travel.
    fn reference_move(&mut self, axis: u8, rate: StepRate, to_min: bool)
        -> Result<(), HomingError>;

    /// Engine-generic tool control write.
    fn tool_write(&mut self, tool: Tool, level: u16);

    /// Engine-generic tool control read.
    fn tool_read(&mut self, tool: Tool) -> u16;

    /// Lifecycle event notification.
    fn on_event(&mut self, event: MotionEvent, info: u32);

    /// Periodic timer tick from the hardware timer interrupt.
    fn timer_tick(&mut self);
}
