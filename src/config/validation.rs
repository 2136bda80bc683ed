//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::MachineConfig;

/// Validate a machine configuration record.
///
/// Checks:
/// - At least one axis is declared
/// - Distance-per-step scale is positive
/// - Step rates are positive
/// - Every axis has a positive maximum travel
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    if config.axes.is_empty() {
        return Err(Error::Config(ConfigError::NoAxes));
    }

    if config.steps_per_mm1000 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepScale(
            config.steps_per_mm1000,
        )));
    }

    if config.max_steprate.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidStepRate(0)));
    }

    if config.homing_steprate.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidStepRate(0)));
    }

    for (index, axis) in config.axes.iter().enumerate() {
        if axis.max_travel.0 <= 0 {
            return Err(Error::Config(ConfigError::InvalidMaxTravel {
                axis: index,
                travel: axis.max_travel.0,
            }));
        }
    }

    Ok(())
}

/// Check the record signature against the value the firmware expects.
///
/// A mismatch means the persisted layout does not match this build and the
/// record must not be used.
pub fn check_signature(config: &MachineConfig, expected: u32) -> Result<()> {
    if config.signature != expected {
        return Err(Error::Config(ConfigError::SignatureMismatch {
            expected,
            found: config.signature,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Mm1000, StepRate};
    use crate::config::{AxisConfig, ReferenceMode};
    use heapless::Vec;

    fn valid_config() -> MachineConfig {
        MachineConfig {
            signature: 0x21436587,
            axes: Vec::from_slice(&[AxisConfig {
                max_travel: Mm1000(36_000),
                reference: ReferenceMode::None,
                homing_order: 255,
                reference_active_high: false,
            }])
            .unwrap(),
            direction_invert_mask: 0,
            max_steprate: StepRate(20_000),
            acceleration: 500,
            deceleration: 550,
            homing_steprate: StepRate(5_000),
            homing_retreat: Mm1000(250),
            steps_per_mm1000: 3.2,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_no_axes_rejected() {
        let mut config = valid_config();
        config.axes.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NoAxes))
        ));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let mut config = valid_config();
        config.steps_per_mm1000 = 0.0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidStepScale(_)))
        ));
    }

    #[test]
    fn test_zero_steprate_rejected() {
        let mut config = valid_config();
        config.max_steprate = StepRate(0);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidStepRate(0)))
        ));
    }

    #[test]
    fn test_negative_travel_rejected() {
        let mut config = valid_config();
        config.axes[0].max_travel = Mm1000(-1);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidMaxTravel { axis: 0, .. }))
        ));
    }

    #[test]
    fn test_signature_check() {
        let config = valid_config();
        assert!(check_signature(&config, 0x21436587).is_ok());
        assert!(matches!(
            check_signature(&config, 0xDEADBEEF),
            Err(Error::Config(ConfigError::SignatureMismatch { .. }))
        ));
    }
}
