//! Register-mapped output port abstraction.

/// A write-only byte-wide output port.
///
/// On real hardware this is a register write (a whole GPIO port, or a pair
/// of partial ports stitched together); it cannot fail and must complete in
/// bounded time, since it is driven from the step-emission interrupt path.
pub trait OutputPort {
    /// Drive the port to `value`.
    fn write(&mut self, value: u8);
}

// Allow borrowed ports so a sequencer can share a port owned elsewhere.
impl<P: OutputPort + ?Sized> OutputPort for &mut P {
    #[inline]
    fn write(&mut self, value: u8) {
        (**self).write(value);
    }
}
