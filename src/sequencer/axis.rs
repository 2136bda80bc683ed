//! Per-axis phase state and step-mode selection.

use super::level::EnableLevel;

/// Step mode selecting which output table drives an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepMode {
    /// 4-entry full-step table.
    #[default]
    Full,
    /// 8-entry half-step table.
    Half,
}

impl StepMode {
    /// Size of the output table for this mode.
    #[inline]
    pub const fn table_size(self) -> u8 {
        match self {
            StepMode::Full => 4,
            StepMode::Half => 8,
        }
    }
}

/// Per-axis state owned by the phase sequencer.
///
/// The phase accumulator wraps freely as a `u8`; it is interpreted modulo
/// the table size of the axis's current step mode at output time. Mutated
/// on the step-emission path, which may run in interrupt context.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisPhaseState {
    /// Phase accumulator (wrapping; masked by table size at output).
    pub phase: u8,
    /// Current enable level.
    pub level: EnableLevel,
    /// Fixed address-select bits for this axis's slot in the output byte.
    pub address: u8,
}
