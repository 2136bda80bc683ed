//! Sampled supervisory input signals.

use embedded_hal::digital::InputPin;

/// A read-only digital input sampled once per poll.
///
/// Wraps an embedded-hal pin with its active level. The supervisory layer
/// never owns the physical input beyond sampling it; a read error is
/// treated as inactive.
pub struct SignalInput<PIN: InputPin> {
    pin: PIN,
    active_high: bool,
}

impl<PIN: InputPin> SignalInput<PIN> {
    /// Wrap a pin whose active state reads high.
    pub fn active_high(pin: PIN) -> Self {
        Self {
            pin,
            active_high: true,
        }
    }

    /// Wrap a pin whose active state reads low (e.g. with a pull-up and a
    /// switch to ground).
    pub fn active_low(pin: PIN) -> Self {
        Self {
            pin,
            active_high: false,
        }
    }

    /// Sample the signal.
    pub fn is_active(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high == self.active_high,
            Err(_) => false,
        }
    }

    /// Release the wrapped pin.
    pub fn release(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    #[test]
    fn test_active_high_sampling() {
        let expectations = [
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut input = SignalInput::active_high(Mock::new(&expectations));
        assert!(input.is_active());
        assert!(!input.is_active());
        input.release().done();
    }

    #[test]
    fn test_active_low_sampling() {
        let expectations = [
            Transaction::get(State::Low),
            Transaction::get(State::High),
        ];
        let mut input = SignalInput::active_low(Mock::new(&expectations));
        assert!(input.is_active());
        assert!(!input.is_active());
        input.release().done();
    }
}
