//! Integration tests for the stepper-phase library.
//!
//! Verify the complete workflow from TOML configuration through driver
//! construction to latched output codes.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use proptest::prelude::*;

use stepper_phase::sequencer::tables::{self, FULL_STEP_MAX};
use stepper_phase::{
    DriverOptions, EnableLevel, MotionEngine, MotionEvent, OutputPort, PhaseSequencer, StepMode,
    StepRate, Steps, Tool, SMC_AXES,
};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct RecordingPort {
    writes: Vec<u8>,
}

impl OutputPort for RecordingPort {
    fn write(&mut self, value: u8) {
        self.writes.push(value);
    }
}

struct TestPin {
    state: bool,
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.state = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.state = true;
        Ok(())
    }
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.state)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.state)
    }
}

#[derive(Default)]
struct RelativeMoveProbe {
    rate: StepRate,
    deltas: Vec<Steps>,
}

impl MotionEngine for RelativeMoveProbe {
    fn init(&mut self) {}
    fn poll(&mut self) {}
    fn is_hold(&self) -> bool {
        false
    }
    fn hold(&mut self) {}
    fn resume(&mut self) {}
    fn kill(&mut self) {}
    fn move_relative(&mut self, rate: StepRate, deltas: &[Steps]) {
        self.rate = rate;
        self.deltas = deltas.to_vec();
    }
    fn reference_move(
        &mut self,
        _axis: u8,
        _rate: StepRate,
        _to_min: bool,
    ) -> Result<(), stepper_phase::error::HomingError> {
        Ok(())
    }
    fn tool_write(&mut self, _tool: Tool, _level: u16) {}
    fn tool_read(&mut self, _tool: Tool) -> u16 {
        0
    }
    fn on_event(&mut self, _event: MotionEvent, _info: u32) {}
    fn timer_tick(&mut self) {}
}

fn sequencer(options: DriverOptions) -> PhaseSequencer<RecordingPort, TestPin, TestPin> {
    let mut seq = PhaseSequencer::new(
        RecordingPort::default(),
        TestPin { state: false },
        TestPin { state: false },
        options,
    )
    .expect("valid options");
    seq.init().expect("init");
    seq
}

// =============================================================================
// Configuration -> driver workflow
// =============================================================================

const MACHINE_CONFIG: &str = r#"
signature = 0x21436587
direction_invert_mask = 0
max_steprate = 20000
acceleration = 500
deceleration = 550
homing_steprate = 5000
homing_retreat = 250
steps_per_mm1000 = 1.0

[[axes]]
max_travel = 1200
reference = "to_minimum"
homing_order = 0

[[axes]]
max_travel = 36000
reference = "to_minimum"
homing_order = 1

[[axes]]
max_travel = 10000
reference = "to_maximum"
homing_order = 2
"#;

#[test]
fn config_to_driver_workflow() {
    let config = stepper_phase::config::parse_config(MACHINE_CONFIG).expect("config parses");
    assert_eq!(config.axis_count(), 3);

    let options = DriverOptions::from_config(&config);
    // steps_per_mm1000 = 1.0, so travel maps 1:1 to steps
    assert_eq!(options.max_travel[0], Steps(1200));
    assert_eq!(options.max_travel[2], Steps(10_000));

    let mut seq = sequencer(options);
    seq.set_enable_level(0, 255, false);
    seq.step(&[1, 0, 0], 0b001);
    assert_eq!(seq.phase(0), 1);
}

#[test]
fn move_away_clamp_from_configured_travel() {
    // Travel 1200 steps on axis 0: a 1000-step retreat clamps to 600
    let config = stepper_phase::config::parse_config(MACHINE_CONFIG).unwrap();
    let seq = sequencer(DriverOptions::from_config(&config));
    let mut engine = RelativeMoveProbe::default();

    seq.move_away_from_reference(&mut engine, 0, Steps(1000), StepRate(4000));

    assert_eq!(engine.deltas[0], Steps(600));
    assert_eq!(engine.deltas[1], Steps(1000));
    assert_eq!(engine.deltas[2], Steps(1000));
    assert_eq!(engine.rate, StepRate(4000));
}

// =============================================================================
// Output path scenarios
// =============================================================================

#[test]
fn full_step_scenario_emits_table_entry_plus_address() {
    // Accumulator 0, step 5 up on axis 0: 5 mod 4 = 1
    let mut seq = sequencer(DriverOptions::default());
    seq.set_enable_level(0, 255, false);
    seq.step(&[5, 0, 0], 0b001);
    assert_eq!(seq.phase(0), 5);

    let emitted = *seq.release().0.writes.last().unwrap();
    assert_eq!(emitted, FULL_STEP_MAX[1]);
}

#[test]
fn forced_enable_level_latches_immediately() {
    // 70 on the 0-255 scale quantizes to Mid with thresholds 153/51
    let mut seq = sequencer(DriverOptions::default());
    seq.set_enable_level(0, 70, true);
    assert_eq!(seq.enable_level(0), EnableLevel::Mid);

    let (port, _, _) = seq.release();
    assert_eq!(port.writes.len(), 1);
}

#[test]
fn multi_axis_step_emits_in_presentation_order() {
    let mut seq = sequencer(DriverOptions::default());
    seq.set_enable_level(0, 255, false);
    seq.set_enable_level(1, 255, false);
    seq.set_enable_level(2, 255, false);
    seq.step(&[1, 1, 1], 0b111);

    let (port, _, _) = seq.release();
    assert_eq!(port.writes.len(), 3);
    // Address bits identify each axis's slot in order
    assert_eq!(port.writes[0] & 0xC0, 0x00);
    assert_eq!(port.writes[1] & 0xC0, 0x40);
    assert_eq!(port.writes[2] & 0xC0, 0x80);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #[test]
    fn accumulator_follows_signed_count_mod_table(
        start in 0u8..=255,
        count in 0u8..=255,
        up in any::<bool>(),
        half in any::<bool>(),
    ) {
        let mut seq = sequencer(DriverOptions::default());
        let mode = if half { StepMode::Half } else { StepMode::Full };
        seq.set_step_mode(0, mode);
        // Preload the accumulator
        seq.step(&[start, 0, 0], 0b001);
        seq.step(&[count, 0, 0], if up { 0b001 } else { 0b000 });

        let expected = if up {
            start.wrapping_add(count)
        } else {
            start.wrapping_sub(count)
        };
        prop_assert_eq!(seq.phase(0), expected);
        if count != 0 {
            // The emitted code indexes the table at accumulator mod size
            let emitted = *seq.release().0.writes.last().unwrap();
            let code = tables::output_code(mode, EnableLevel::Off, expected);
            prop_assert_eq!(emitted & tables::DATA_BITS, code);
        }
    }

    #[test]
    fn quantization_is_monotonic(a in 0u8..=255, b in 0u8..=255, reduced in any::<bool>()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let quantized_low = EnableLevel::quantize(low, reduced);
        let quantized_high = EnableLevel::quantize(high, reduced);
        prop_assert!(quantized_low <= quantized_high);
        if reduced {
            prop_assert_ne!(quantized_low, EnableLevel::Mid);
            prop_assert_ne!(quantized_high, EnableLevel::Mid);
        }
    }

    #[test]
    fn move_away_never_exceeds_half_travel(
        distance in 0i32..2_000_000,
        travel in 1i32..2_000_000,
    ) {
        let options = DriverOptions {
            max_travel: [Steps(travel); SMC_AXES],
            ..DriverOptions::default()
        };
        let seq = sequencer(options);
        let mut engine = RelativeMoveProbe::default();
        seq.move_away_from_reference(&mut engine, 0, Steps(distance), StepRate(1000));

        for delta in engine.deltas {
            prop_assert!(delta.0 <= travel / 2);
        }
    }

    #[test]
    fn output_codes_never_escape_axis_slot(
        phase in 0u8..=255,
        level_raw in 0u8..=255,
        half in any::<bool>(),
    ) {
        let mode = if half { StepMode::Half } else { StepMode::Full };
        let level = EnableLevel::quantize(level_raw, false);
        let code = tables::output_code(mode, level, phase);
        prop_assert_eq!(code & !tables::DATA_BITS, 0);
    }
}
