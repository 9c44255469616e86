//! Button interface.

use crate::error::Result;

/// Push button interface.
pub trait ButtonInterface {
    /// Get whether a button is currently pressed.
    ///
    /// Must not block; waiting is done by polling this.
    fn get_button_state(&mut self, identifier: usize) -> Result<bool>;
}
