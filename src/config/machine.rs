//! Machine configuration record.
//!
//! Mirrors the persisted configuration record the controller firmware reads
//! at startup: a signature for validation, per-axis definitions, and the
//! global motion parameters the low-level core needs. This core only reads
//! the record; writing it belongs to the host-side configuration tool.

use heapless::Vec;
use serde::Deserialize;

use super::units::{FeedRate, Mm1000, StepRate, Steps};

/// Maximum number of axes the motion engine supports.
pub const MAX_AXES: usize = 6;

/// How an axis uses its reference (limit) sensor for homing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMode {
    /// Axis has no reference sensor; it cannot be homed.
    #[default]
    None,
    /// Home toward the minimum-coordinate end of travel.
    ToMinimum,
    /// Home toward the maximum-coordinate end of travel.
    ToMaximum,
}

/// Homing-order value meaning "this axis is not part of the homing sequence".
pub const HOMING_ORDER_NONE: u8 = 255;

fn default_homing_order() -> u8 {
    HOMING_ORDER_NONE
}

/// Per-axis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Maximum travel in thousandths of a physical unit.
    pub max_travel: Mm1000,

    /// Reference sensor usage for this axis.
    #[serde(default)]
    pub reference: ReferenceMode,

    /// Position of this axis in the homing sequence (255 = not homed).
    #[serde(default = "default_homing_order")]
    pub homing_order: u8,

    /// Whether the reference sensor reads high when hit.
    #[serde(default)]
    pub reference_active_high: bool,
}

impl AxisConfig {
    /// Maximum travel converted to steps.
    #[inline]
    pub fn max_travel_steps(&self, steps_per_mm1000: f32) -> Steps {
        self.max_travel.to_steps(steps_per_mm1000)
    }
}

/// Root machine configuration record.
///
/// Field set follows the persisted controller record: signature, axis table,
/// then the global motion parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Signature value validating the record layout.
    pub signature: u32,

    /// Per-axis definitions, in axis order.
    pub axes: Vec<AxisConfig, MAX_AXES>,

    /// Bitmask inverting the direction of each axis (bit i = axis i).
    #[serde(default)]
    pub direction_invert_mask: u8,

    /// Maximum step rate in steps/sec.
    pub max_steprate: StepRate,

    /// Acceleration in steps/sec².
    pub acceleration: u32,

    /// Deceleration in steps/sec².
    pub deceleration: u32,

    /// Step rate used for reference (homing) moves.
    pub homing_steprate: StepRate,

    /// Distance to retreat from the reference sensor after homing.
    pub homing_retreat: Mm1000,

    /// Distance-per-step scale: steps per Mm1000.
    pub steps_per_mm1000: f32,
}

impl MachineConfig {
    /// Number of configured axes.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Get an axis configuration by index.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<&AxisConfig> {
        self.axes.get(index)
    }

    /// Whether the direction of an axis is inverted.
    #[inline]
    pub fn direction_inverted(&self, axis: usize) -> bool {
        axis < MAX_AXES && self.direction_invert_mask & (1 << axis) != 0
    }

    /// Convert a feed rate to a step rate, clamped to the configured maximum.
    #[inline]
    pub fn feed_to_step_rate(&self, feed: FeedRate) -> StepRate {
        feed.to_step_rate(self.steps_per_mm1000).min(self.max_steprate)
    }
}
