//! LED interface.

use crate::error::Result;

/// Indicator LED interface.
pub trait LedInterface {
    /// Get the state of an LED.
    fn get_led_state(&mut self, identifier: usize) -> Result<bool>;

    /// Set the state of an LED.
    fn set_led_state(&mut self, identifier: usize, state: bool) -> Result<()>;
}
