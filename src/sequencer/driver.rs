//! Phase-sequencing stepper driver.
//!
//! Translates per-tick step/direction intents into the output codes the
//! SMC800-class driver chip requires, latched through a shared strobe line.
//! Generic over embedded-hal 1.0 pin types plus a register-mapped
//! [`OutputPort`].

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::{StepRate, Steps};
use crate::config::MachineConfig;
use crate::engine::MotionEngine;
use crate::error::{ConfigError, DriverError, Error, Result};

use super::axis::{AxisPhaseState, StepMode};
use super::level::EnableLevel;
use super::port::OutputPort;
use super::tables::{output_code, DATA_BITS};
use super::SMC_AXES;

/// Default axis address-select bit patterns (axis index -> output-byte slot).
pub const DEFAULT_AXIS_ADDRESS: [u8; SMC_AXES] = [0x00, 0x40, 0x80];

/// Construction-time driver options.
///
/// Capability flags are read once here; they never change at runtime.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Omit the Mid current level (reduced-capability driver variant).
    pub reduced_levels: bool,

    /// Whether the shared reference input reads high in its active state.
    pub reference_active_high: bool,

    /// Address-select bits per axis; must be non-overlapping and disjoint
    /// from the output data bits.
    pub axis_address: [u8; SMC_AXES],

    /// Per-axis maximum travel in steps, bounding reference retreat moves.
    pub max_travel: [Steps; SMC_AXES],
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            reduced_levels: false,
            reference_active_high: true,
            axis_address: DEFAULT_AXIS_ADDRESS,
            max_travel: [Steps(0); SMC_AXES],
        }
    }
}

impl DriverOptions {
    /// Derive options from the machine configuration record.
    ///
    /// Takes the per-axis maximum travel (converted to steps); address map
    /// and capability flags keep their defaults and can be overridden on
    /// the returned value.
    pub fn from_config(config: &MachineConfig) -> Self {
        let mut max_travel = [Steps(0); SMC_AXES];
        for (slot, axis) in max_travel.iter_mut().zip(config.axes.iter()) {
            *slot = axis.max_travel_steps(config.steps_per_mm1000);
        }
        Self {
            max_travel,
            ..Self::default()
        }
    }
}

/// Phase-sequencing stepper driver.
///
/// Owns the per-axis phase accumulators and enable levels, the output port,
/// the strobe line, and the shared reference input. [`step`](Self::step) is
/// safe to call from the timer-interrupt path; all other mutations happen
/// in mainline context and use a critical section where more than a single
/// word of interrupt-shared state changes.
pub struct PhaseSequencer<PORT, STROBE, REFIN>
where
    PORT: OutputPort,
    STROBE: OutputPin,
    REFIN: InputPin,
{
    /// Shared output byte port.
    port: PORT,

    /// Strobe line latching the output byte into the chip.
    strobe: STROBE,

    /// Shared reference/limit-sense input (one per driver, not per axis).
    reference: REFIN,

    /// Per-axis phase state.
    axes: [AxisPhaseState; SMC_AXES],

    /// Per-axis step-mode selection.
    step_modes: [StepMode; SMC_AXES],

    /// Idle current level applied when enabled but not moving.
    idle_level: EnableLevel,

    /// Mid level compiled out of quantization.
    reduced_levels: bool,

    /// Active state of the reference input.
    reference_active_high: bool,

    /// Per-axis travel bound for retreat moves.
    max_travel: [Steps; SMC_AXES],
}

impl<PORT, STROBE, REFIN> PhaseSequencer<PORT, STROBE, REFIN>
where
    PORT: OutputPort,
    STROBE: OutputPin,
    REFIN: InputPin,
{
    /// Create a sequencer, validating the axis address map.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if two axes share address bits or an
    /// address pattern collides with the output data bits.
    pub fn new(port: PORT, strobe: STROBE, reference: REFIN, options: DriverOptions) -> Result<Self> {
        validate_axis_addresses(&options.axis_address)?;

        let mut axes = [AxisPhaseState::default(); SMC_AXES];
        for (axis, state) in axes.iter_mut().enumerate() {
            state.address = options.axis_address[axis];
        }

        Ok(Self {
            port,
            strobe,
            reference,
            axes,
            step_modes: [StepMode::default(); SMC_AXES],
            idle_level: EnableLevel::Low,
            reduced_levels: options.reduced_levels,
            reference_active_high: options.reference_active_high,
            max_travel: options.max_travel,
        })
    }

    /// Configure the claimed lines and reset all per-axis state.
    ///
    /// Drives the strobe to its idle-high state, zeroes every phase
    /// accumulator, sets every enable level to Off, and the idle level to
    /// its Low default.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Pin`] if the strobe line cannot be driven.
    /// Failure here is a fatal precondition violation upstream; the step
    /// path assumes the lines are usable.
    pub fn init(&mut self) -> Result<()> {
        for state in self.axes.iter_mut() {
            state.phase = 0;
            state.level = EnableLevel::Off;
        }
        self.idle_level = EnableLevel::Low;

        self.strobe
            .set_high()
            .map_err(|_| Error::Driver(DriverError::Pin))
    }

    /// Release the claimed lines back to their owner.
    ///
    /// The hardware equivalent returns the lines to a high-impedance input
    /// state; with embedded-hal 1.0 that reconfiguration belongs to whoever
    /// receives the pins back.
    pub fn release(self) -> (PORT, STROBE, REFIN) {
        (self.port, self.strobe, self.reference)
    }

    /// Issue steps on each axis and latch the updated outputs.
    ///
    /// For every axis with a non-zero count the phase accumulator moves by
    /// the count (up if the axis's bit is set in `direction_mask`, down
    /// otherwise) and that axis's output code is recomputed and latched.
    /// Zero-count axes are left untouched. Axes beyond the driver capacity
    /// are ignored.
    ///
    /// Called from the timer-interrupt path: no allocation, no blocking,
    /// and nothing here returns an error.
    pub fn step(&mut self, steps: &[u8], direction_mask: u8) {
        let mut mask = 1u8;
        for axis in 0..SMC_AXES.min(steps.len()) {
            let count = steps[axis];
            if count != 0 {
                let state = &mut self.axes[axis];
                if direction_mask & mask != 0 {
                    state.phase = state.phase.wrapping_add(count);
                } else {
                    state.phase = state.phase.wrapping_sub(count);
                }
                self.apply_phase(axis);
            }
            mask <<= 1;
        }
    }

    /// Set the enable level for an axis from a 0-255 requested value.
    ///
    /// The request is quantized to the nearest supported level. With
    /// `force` the output is recomputed and latched immediately; otherwise
    /// the new level takes effect on the axis's next step. Out-of-range
    /// axes are a silent no-op.
    pub fn set_enable_level(&mut self, axis: usize, requested: u8, force: bool) {
        if axis >= SMC_AXES {
            return;
        }
        let level = EnableLevel::quantize(requested, self.reduced_levels);
        if force {
            // Level write plus latch is a multi-field update of state the
            // interrupt path reads.
            critical_section::with(|_| {
                self.axes[axis].level = level;
                self.apply_phase(axis);
            });
        } else {
            // Single enum write; the interrupt path tolerates either value.
            self.axes[axis].level = level;
        }
    }

    /// Current enable level of an axis. Off for out-of-range axes.
    #[inline]
    pub fn enable_level(&self, axis: usize) -> EnableLevel {
        self.axes
            .get(axis)
            .map(|state| state.level)
            .unwrap_or(EnableLevel::Off)
    }

    /// Select the step mode for an axis. Out-of-range axes are a no-op.
    ///
    /// The phase accumulator is deliberately left untouched: an in-flight
    /// accumulator is reinterpreted modulo the new table size, preserving
    /// the chip's phase continuity. Call [`reset_phase`](Self::reset_phase)
    /// when a clean phase origin is required.
    pub fn set_step_mode(&mut self, axis: usize, mode: StepMode) {
        if let Some(slot) = self.step_modes.get_mut(axis) {
            *slot = mode;
        }
    }

    /// Step mode of an axis. Full for out-of-range axes.
    #[inline]
    pub fn step_mode(&self, axis: usize) -> StepMode {
        self.step_modes.get(axis).copied().unwrap_or_default()
    }

    /// Reset an axis's phase accumulator to zero.
    pub fn reset_phase(&mut self, axis: usize) {
        if let Some(state) = self.axes.get_mut(axis) {
            state.phase = 0;
        }
    }

    /// Current phase accumulator value of an axis (raw, unmasked).
    #[inline]
    pub fn phase(&self, axis: usize) -> u8 {
        self.axes.get(axis).map(|state| state.phase).unwrap_or(0)
    }

    /// Set the global idle current level.
    #[inline]
    pub fn set_idle_level(&mut self, level: EnableLevel) {
        self.idle_level = level;
    }

    /// Global idle current level.
    #[inline]
    pub fn idle_level(&self) -> EnableLevel {
        self.idle_level
    }

    /// Sample the shared reference/limit input.
    ///
    /// A single input serves all axes on this driver variant; that is a
    /// constraint of the supported chip, not a design choice.
    pub fn is_reference_active(&mut self) -> bool {
        match self.reference.is_high() {
            Ok(high) => high == self.reference_active_high,
            Err(_) => false,
        }
    }

    /// Retreat from the reference sensor with a bounded relative move.
    ///
    /// All three driver axes retreat together (the shared reference input
    /// cannot distinguish which axis is on its sensor), each clamped to at
    /// most half of its configured maximum travel so a stuck sensor cannot
    /// carry the mechanism past the opposite limit. The move itself is
    /// delegated to the motion engine; this only computes the clamp.
    pub fn move_away_from_reference<E: MotionEngine>(
        &self,
        engine: &mut E,
        _axis: usize,
        distance: Steps,
        max_rate: StepRate,
    ) {
        let mut deltas = [Steps(0); SMC_AXES];
        for (axis, delta) in deltas.iter_mut().enumerate() {
            *delta = Steps(distance.0.min(self.max_travel[axis].0 / 2));
        }
        engine.move_relative(max_rate, &deltas);
    }

    /// Recompute and latch the output byte for one axis.
    fn apply_phase(&mut self, axis: usize) {
        if axis < SMC_AXES {
            let state = self.axes[axis];
            let code = output_code(self.step_modes[axis], state.level, state.phase);
            self.latch(code + state.address);
        }
    }

    /// Write the output byte and pulse the strobe low-then-high.
    ///
    /// Runs on the step path; strobe errors cannot cross the interrupt
    /// boundary and are dropped.
    fn latch(&mut self, value: u8) {
        self.port.write(value);
        let _ = self.strobe.set_low();
        let _ = self.strobe.set_high();
    }
}

/// Check that axis address patterns are pairwise disjoint and stay out of
/// the output data bits.
fn validate_axis_addresses(addresses: &[u8; SMC_AXES]) -> Result<()> {
    for (axis, &address) in addresses.iter().enumerate() {
        if address & DATA_BITS != 0 {
            return Err(Error::Config(ConfigError::AddressInDataBits { axis, address }));
        }
        for (other, &other_address) in addresses.iter().enumerate().skip(axis + 1) {
            if address == other_address || address & other_address != 0 {
                return Err(Error::Config(ConfigError::OverlappingAxisAddress {
                    first: axis,
                    second: other,
                }));
            }
        }
    }
    Ok(())
}
