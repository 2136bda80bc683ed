//! Enable/current level quantization.

/// Quantized drive-current level presented to a stepper winding.
///
/// Levels between the quantized steps are undefined states for the driver
/// chip, so every requested value is snapped to one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableLevel {
    /// Windings de-energized.
    #[default]
    Off,
    /// Low holding current (20%).
    Low,
    /// Mid current (60%). Not selectable on reduced-capability drivers.
    Mid,
    /// Full drive current.
    Max,
}

/// Requested values above this quantize to [`EnableLevel::Max`] (60% of 255).
pub const MAX_THRESHOLD: u8 = 153;

/// Requested values above this quantize to [`EnableLevel::Mid`] (20% of 255).
pub const MID_THRESHOLD: u8 = 51;

impl EnableLevel {
    /// Quantize a requested 0-255 level using the ordered thresholds.
    ///
    /// With `reduced` set, the Mid step is unavailable and everything between
    /// Off and the Max threshold becomes Low.
    #[inline]
    pub fn quantize(requested: u8, reduced: bool) -> Self {
        if requested > MAX_THRESHOLD {
            EnableLevel::Max
        } else if !reduced && requested > MID_THRESHOLD {
            EnableLevel::Mid
        } else if requested > 0 {
            EnableLevel::Low
        } else {
            EnableLevel::Off
        }
    }

    /// Whether any current is being driven.
    #[inline]
    pub fn is_on(self) -> bool {
        self != EnableLevel::Off
    }
}
