//! SMC800 output-code lookup tables.
//!
//! The driver chip encodes winding phase and current-limit selection in a
//! single byte latched by a shared strobe. These tables are the exact codes
//! the chip requires; preserving their contents is a hardware-compatibility
//! requirement, not just a behavioral one. Levels or phases outside the
//! tables are undefined hardware states and must never be emitted.

use super::axis::StepMode;
use super::level::EnableLevel;

/// Half-step codes, current off.
pub const HALF_STEP_OFF: [u8; 8] = [0x3F, 0x3F, 0x1F, 0x1F, 0x1B, 0x1B, 0x3B, 0x3B];
/// Half-step codes, low (20%) current.
pub const HALF_STEP_LOW: [u8; 8] = [0x37, 0x36, 0x1E, 0x16, 0x13, 0x12, 0x3A, 0x32];
/// Half-step codes, mid (60%) current.
pub const HALF_STEP_MID: [u8; 8] = [0x2F, 0x2D, 0x1D, 0x0D, 0x0B, 0x09, 0x39, 0x29];
/// Half-step codes, maximum current.
pub const HALF_STEP_MAX: [u8; 8] = [0x27, 0x2D, 0x1C, 0x0D, 0x03, 0x09, 0x38, 0x29];

/// Full-step codes, current off.
pub const FULL_STEP_OFF: [u8; 4] = [0x3F, 0x3B, 0x1B, 0x1F];
/// Full-step codes, low (20%) current.
pub const FULL_STEP_LOW: [u8; 4] = [0x36, 0x32, 0x12, 0x16];
/// Full-step codes, mid (60%) current.
pub const FULL_STEP_MID: [u8; 4] = [0x2D, 0x29, 0x09, 0x0D];
/// Full-step codes, maximum current.
pub const FULL_STEP_MAX: [u8; 4] = [0x24, 0x20, 0x00, 0x04];

/// Bits of the output byte carrying winding/current data (the remaining two
/// bits select the axis).
pub const DATA_BITS: u8 = 0x3F;

/// Look up the output code for a step mode, enable level, and phase
/// accumulator value.
///
/// The accumulator is masked to the table size in effect for `mode`; the
/// caller never needs to pre-reduce it.
#[inline]
pub fn output_code(mode: StepMode, level: EnableLevel, phase: u8) -> u8 {
    match mode {
        StepMode::Full => {
            let idx = (phase & 0x3) as usize;
            match level {
                EnableLevel::Off => FULL_STEP_OFF[idx],
                EnableLevel::Low => FULL_STEP_LOW[idx],
                EnableLevel::Mid => FULL_STEP_MID[idx],
                EnableLevel::Max => FULL_STEP_MAX[idx],
            }
        }
        StepMode::Half => {
            let idx = (phase & 0x7) as usize;
            match level {
                EnableLevel::Off => HALF_STEP_OFF[idx],
                EnableLevel::Low => HALF_STEP_LOW[idx],
                EnableLevel::Mid => HALF_STEP_MID[idx],
                EnableLevel::Max => HALF_STEP_MAX[idx],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_full_step_contents() {
        // Byte-for-byte chip compatibility
        assert_eq!(FULL_STEP_OFF, [0x3F, 0x3B, 0x1B, 0x1F]);
        assert_eq!(FULL_STEP_LOW, [0x36, 0x32, 0x12, 0x16]);
        assert_eq!(FULL_STEP_MID, [0x2D, 0x29, 0x09, 0x0D]);
        assert_eq!(FULL_STEP_MAX, [0x24, 0x20, 0x00, 0x04]);
    }

    #[test]
    fn test_exact_half_step_contents() {
        assert_eq!(HALF_STEP_OFF, [0x3F, 0x3F, 0x1F, 0x1F, 0x1B, 0x1B, 0x3B, 0x3B]);
        assert_eq!(HALF_STEP_LOW, [0x37, 0x36, 0x1E, 0x16, 0x13, 0x12, 0x3A, 0x32]);
        assert_eq!(HALF_STEP_MID, [0x2F, 0x2D, 0x1D, 0x0D, 0x0B, 0x09, 0x39, 0x29]);
        assert_eq!(HALF_STEP_MAX, [0x27, 0x2D, 0x1C, 0x0D, 0x03, 0x09, 0x38, 0x29]);
    }

    #[test]
    fn test_codes_stay_within_data_bits() {
        for phase in 0..=u8::MAX {
            for level in [
                EnableLevel::Off,
                EnableLevel::Low,
                EnableLevel::Mid,
                EnableLevel::Max,
            ] {
                for mode in [StepMode::Full, StepMode::Half] {
                    let code = output_code(mode, level, phase);
                    assert_eq!(code & !DATA_BITS, 0, "code {:#04x} escapes data bits", code);
                }
            }
        }
    }

    #[test]
    fn test_accumulator_masked_by_mode() {
        // Full step masks mod 4, half step mod 8
        assert_eq!(
            output_code(StepMode::Full, EnableLevel::Max, 5),
            FULL_STEP_MAX[1]
        );
        assert_eq!(
            output_code(StepMode::Half, EnableLevel::Max, 13),
            HALF_STEP_MAX[5]
        );
    }
}
