//! Board-specific I/O seam.

use crate::engine::{MotionEvent, Tool};

/// Board-specific inputs, tool outputs, and event bookkeeping.
///
/// The supervisory layer samples the workflow/safety inputs through this
/// trait once per poll and dispatches tool control to it first; tools the
/// board does not recognize fall through to the motion engine. Implement it
/// over the concrete pins of a controller board, typically by composing
/// [`SignalInput`](super::SignalInput)s.
pub trait ControlBoard {
    /// Initialize board inputs and outputs.
    fn init(&mut self);

    /// Touch-probe input state.
    fn probe_active(&mut self) -> bool;

    /// Operator hold input state.
    fn hold_active(&mut self) -> bool;

    /// Operator resume input state.
    fn resume_active(&mut self) -> bool;

    /// Combined hold-and-resume input state (single toggle button boards).
    fn hold_resume_active(&mut self) -> bool;

    /// Dedicated kill / E-stop input state.
    fn kill_active(&mut self) -> bool;

    /// Write a tool output level.
    ///
    /// Returns `true` if this board handled the tool; `false` lets the
    /// generic engine handling take over.
    fn tool_write(&mut self, tool: Tool, level: u16) -> bool;

    /// Read a tool level.
    ///
    /// `None` lets the generic engine handling answer.
    fn tool_read(&mut self, tool: Tool) -> Option<u16>;

    /// Motion-engine lifecycle event bookkeeping, invoked before default
    /// handling so board state stays synchronized with the engine.
    fn on_event(&mut self, event: MotionEvent, info: u32);

    /// Periodic timer tick forwarded from the engine interrupt.
    fn timer_tick(&mut self) {}

    /// Board-side shutdown when the kill state latches.
    fn kill(&mut self) {}
}
