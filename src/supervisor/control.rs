//! Supervisory control layer.
//!
//! Arbitrates hold/resume/kill around the motion engine's lifecycle and
//! dispatches board-specific tool I/O, falling back to the engine for
//! anything the board does not own.

use heapless::Vec;

use crate::config::units::{FeedRate, StepRate};
use crate::config::{MachineConfig, ReferenceMode, MAX_AXES};
use crate::engine::{MotionEngine, MotionEvent, Tool};
use crate::error::{HomingError, Result};

use super::board::ControlBoard;
use super::mode::ControlMode;

/// Feed rate of the fast homing approach, in Mm1000/min.
pub const HOMING_FEED_FAST: FeedRate = FeedRate(1_000_000);

/// Feed rate of the slow precision homing pass, in Mm1000/min.
pub const HOMING_FEED_SLOW: FeedRate = FeedRate(200_000);

/// Supervisory control layer over a motion engine and a controller board.
///
/// Invoke [`poll`](Self::poll) once per mainline cycle and forward every
/// engine lifecycle event through [`on_motion_event`](Self::on_motion_event)
/// and [`timer_tick`](Self::timer_tick) so board-specific state stays
/// synchronized.
pub struct Supervisor<E, B>
where
    E: MotionEngine,
    B: ControlBoard,
{
    engine: E,
    board: B,
    mode: ControlMode,
    diagnostic: Option<&'static str>,
    homing_fast: StepRate,
    homing_slow: StepRate,
    reference_modes: Vec<ReferenceMode, MAX_AXES>,
}

impl<E, B> Supervisor<E, B>
where
    E: MotionEngine,
    B: ControlBoard,
{
    /// Create a supervisor around an engine and a board.
    ///
    /// The supervisor is not operational until [`init`](Self::init) runs
    /// with a validated configuration record.
    pub fn new(engine: E, board: B) -> Self {
        Self {
            engine,
            board,
            mode: ControlMode::Running,
            diagnostic: None,
            homing_fast: StepRate(0),
            homing_slow: StepRate(0),
            reference_modes: Vec::new(),
        }
    }

    /// Initialize from the persisted configuration record.
    ///
    /// Order matters: the record is validated first (signature included, so
    /// a stale layout is rejected before anything derives from it), then
    /// board inputs and outputs come up, then the engine runs its standard
    /// initialization sequence and computes its derived limits.
    pub fn init(&mut self, config: &MachineConfig, expected_signature: u32) -> Result<()> {
        crate::config::check_signature(config, expected_signature)?;
        crate::config::validate_config(config)?;

        self.homing_fast = config.feed_to_step_rate(HOMING_FEED_FAST);
        self.homing_slow = config.feed_to_step_rate(HOMING_FEED_SLOW);
        self.reference_modes.clear();
        for axis in config.axes.iter() {
            let _ = self.reference_modes.push(axis.reference);
        }

        self.board.init();
        self.engine.init();

        self.mode = ControlMode::Running;
        self.diagnostic = None;
        Ok(())
    }

    /// Mainline poll: engine first, then hold/resume/kill arbitration.
    ///
    /// Held state is idempotent across repeated polls; once Killed, polling
    /// changes nothing.
    pub fn poll(&mut self) {
        self.engine.poll();

        if self.is_killed() {
            return;
        }

        if self.engine.is_hold() {
            if self.board.resume_active() || self.board.hold_resume_active() {
                self.engine.resume();
                self.mode = ControlMode::Running;
                self.diagnostic = None;
            }
        } else if self.board.hold_active() || self.board.hold_resume_active() {
            self.engine.hold();
            self.mode = ControlMode::Held;
            self.diagnostic = Some("hold");
        }
    }

    /// Whether the kill condition is (or has ever been) active.
    ///
    /// Monotonic: the first active sample latches Killed, stops the engine
    /// and the board, and raises the E-Stop diagnostic; every later call
    /// answers `true` regardless of the input.
    pub fn is_killed(&mut self) -> bool {
        if self.mode.is_killed() {
            return true;
        }
        if self.board.kill_active() {
            self.mode = ControlMode::Killed;
            self.diagnostic = Some("E-Stop");
            self.engine.kill();
            self.board.kill();
            return true;
        }
        false
    }

    /// Write a tool level, board first, engine fallback.
    ///
    /// Tool codes the board does not recognize are never an error at this
    /// layer; they belong to the engine.
    pub fn tool_write(&mut self, tool: Tool, level: u16) {
        if !self.board.tool_write(tool, level) {
            self.engine.tool_write(tool, level);
        }
    }

    /// Read a tool level, board first, engine fallback.
    pub fn tool_read(&mut self, tool: Tool) -> u16 {
        match self.board.tool_read(tool) {
            Some(level) => level,
            None => self.engine.tool_read(tool),
        }
    }

    /// Two-pass homing sequence for one axis.
    ///
    /// A fast approach finds the reference sensor, then a slow pass repeats
    /// the approach for precision. If the fast pass fails the slow pass is
    /// not attempted and the failure propagates.
    pub fn go_to_reference(&mut self, axis: u8, to_min: bool) -> core::result::Result<(), HomingError> {
        let mode = self
            .reference_modes
            .get(axis as usize)
            .copied()
            .unwrap_or_default();
        if mode == ReferenceMode::None {
            return Err(HomingError::NotConfigured { axis });
        }

        self.engine.reference_move(axis, self.homing_fast, to_min)?;
        self.engine.reference_move(axis, self.homing_slow, to_min)
    }

    /// Forward an engine lifecycle event, board bookkeeping first.
    pub fn on_motion_event(&mut self, event: MotionEvent, info: u32) {
        self.board.on_event(event, info);
        self.engine.on_event(event, info);
    }

    /// Forward the periodic timer tick to engine and board.
    pub fn timer_tick(&mut self) {
        self.engine.timer_tick();
        self.board.timer_tick();
    }

    /// Touch-probe input state.
    #[inline]
    pub fn probe_active(&mut self) -> bool {
        self.board.probe_active()
    }

    /// Current control mode.
    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Current diagnostic message, if any.
    #[inline]
    pub fn diagnostic(&self) -> Option<&'static str> {
        self.diagnostic
    }

    /// Borrow the motion engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the motion engine.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Borrow the controller board.
    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutably borrow the controller board.
    #[inline]
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Step rates of the two homing passes (fast, slow).
    #[inline]
    pub fn homing_rates(&self) -> (StepRate, StepRate) {
        (self.homing_fast, self.homing_slow)
    }
}
