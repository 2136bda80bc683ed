//! # stepper-phase
//!
//! Phase-sequencing stepper driver and supervisory motion control with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Table-driven phase sequencing**: exact SMC800 output codes for
//!   full-step and half-step modes at four quantized current levels
//! - **embedded-hal 1.0**: `OutputPin` for the strobe, `InputPin` for
//!   reference and supervisory signals
//! - **no_std compatible**: core library works without the standard library
//! - **Interrupt-safe**: the step path is bounded and allocation-free;
//!   mainline updates of shared state use `critical-section`
//! - **Supervisory arbitration**: hold/resume/kill state machine and tool
//!   dispatch layered over a motion-engine trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_phase::{DriverOptions, PhaseSequencer, Supervisor};
//!
//! // Load the machine configuration record
//! let config = stepper_phase::load_config("machine.toml")?;
//!
//! // Create the driver over a register-mapped port and two pins
//! let mut sequencer = PhaseSequencer::new(
//!     port,
//!     strobe_pin,
//!     reference_pin,
//!     DriverOptions::from_config(&config),
//! )?;
//! sequencer.init()?;
//!
//! // Wrap the motion engine and controller board
//! let mut supervisor = Supervisor::new(engine, board);
//! supervisor.init(&config, RECORD_SIGNATURE)?;
//!
//! loop {
//!     supervisor.poll();
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod engine;
pub mod error;
pub mod sequencer;
pub mod supervisor;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, MachineConfig, ReferenceMode};
pub use engine::{MotionEngine, MotionEvent, Tool};
pub use error::{Error, Result};
pub use sequencer::{
    DriverOptions, EnableLevel, OutputPort, PhaseSequencer, StepMode, SMC_AXES,
};
pub use supervisor::{ControlBoard, ControlMode, SignalInput, Supervisor};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{FeedRate, Mm1000, StepRate, Steps};
