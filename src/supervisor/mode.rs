//! Supervisory control state machine.

/// Control mode of the supervisory layer.
///
/// `Running` and `Held` alternate under operator hold/resume inputs.
/// `Killed` is terminal: no transition leaves it except external hardware
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Motion proceeds normally.
    #[default]
    Running,
    /// Motion paused, position preserved, waiting for resume.
    Held,
    /// Emergency stop latched until external reset.
    Killed,
}

impl ControlMode {
    /// Whether motion is currently held.
    #[inline]
    pub fn is_held(self) -> bool {
        self == ControlMode::Held
    }

    /// Whether the terminal kill state has been reached.
    #[inline]
    pub fn is_killed(self) -> bool {
        self == ControlMode::Killed
    }
}
