//! GPIO pin abstractions
//!
//! Provides the single-line output trait used for the alliance indicators
//! and as the building block of [`PinBank`](crate::port::PinBank).

use core::convert::Infallible;

/// Digital output pin
///
/// Implementations handle the actual register manipulation for the chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter from an `embedded-hal` 1.0 output pin
///
/// Only infallible pins are accepted: the multiplex path has no way to
/// recover from a failed line write, and on-chip GPIO never fails.
/// The last written level is cached so [`OutputPin::is_set_high`] does not
/// need `&mut` access to the underlying pin.
pub struct EhPin<P> {
    pin: P,
    high: bool,
}

impl<P> EhPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it low so the cached level is accurate
    pub fn new(mut pin: P) -> Self {
        match pin.set_low() {
            Ok(()) => {}
            Err(e) => match e {},
        }
        Self { pin, high: false }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(e) => match e {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
