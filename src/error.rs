//! Error types for stepper-phase library.
//!
//! Provides unified error handling across configuration, the phase-sequencing
//! driver, and homing sequences.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-phase operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Driver hardware-line error
    Driver(DriverError),
    /// Homing sequence error
    Homing(HomingError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Persisted record signature does not match the expected value
    SignatureMismatch {
        /// Signature the firmware was built against
        expected: u32,
        /// Signature found in the record
        found: u32,
    },
    /// Configuration declares no axes
    NoAxes,
    /// Invalid distance-per-step scale (must be > 0)
    InvalidStepScale(f32),
    /// Invalid step rate (must be > 0)
    InvalidStepRate(u32),
    /// Invalid maximum travel for an axis (must be > 0)
    InvalidMaxTravel {
        /// Axis index
        axis: usize,
        /// Configured travel in thousandths
        travel: i32,
    },
    /// Two axes share output-byte address bits
    OverlappingAxisAddress {
        /// First axis index
        first: usize,
        /// Second axis index
        second: usize,
    },
    /// Axis address bits collide with the output-code data bits
    AddressInDataBits {
        /// Axis index
        axis: usize,
        /// Offending address pattern
        address: u8,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Driver hardware-line errors.
///
/// Only surfaced from setup/teardown paths; the step-emission path never
/// returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Strobe or reference line operation failed
    Pin,
}

/// Homing sequence errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingError {
    /// Reference sensor was not found within the axis travel
    ReferenceNotFound {
        /// Axis that failed to home
        axis: u8,
    },
    /// Axis is configured without a reference sensor
    NotConfigured {
        /// Axis index
        axis: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SignatureMismatch { expected, found } => {
                write!(f, "Record signature {:#x} does not match expected {:#x}", found, expected)
            }
            ConfigError::NoAxes => write!(f, "Configuration declares no axes"),
            ConfigError::InvalidStepScale(v) => {
                write!(f, "Invalid distance-per-step scale: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepRate(v) => write!(f, "Invalid step rate: {}. Must be > 0", v),
            ConfigError::InvalidMaxTravel { axis, travel } => {
                write!(f, "Axis {} has invalid maximum travel {}", axis, travel)
            }
            ConfigError::OverlappingAxisAddress { first, second } => {
                write!(f, "Axes {} and {} share address-select bits", first, second)
            }
            ConfigError::AddressInDataBits { axis, address } => {
                write!(f, "Axis {} address {:#04x} collides with output data bits", axis, address)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Pin => write!(f, "Hardware line operation failed"),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::ReferenceNotFound { axis } => {
                write!(f, "Axis {} reference not found within travel", axis)
            }
            HomingError::NotConfigured { axis } => {
                write!(f, "Axis {} has no reference sensor configured", axis)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}
