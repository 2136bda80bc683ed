//! Configuration module for stepper-phase.
//!
//! Provides types for reading and validating the persisted machine
//! configuration record from TOML files (with `std` feature) or pre-parsed
//! data. The core only ever reads this record.

mod machine;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use machine::{AxisConfig, MachineConfig, ReferenceMode, HOMING_ORDER_NONE, MAX_AXES};
pub use validation::{check_signature, validate_config};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{FeedRate, Mm1000, StepRate, Steps};
