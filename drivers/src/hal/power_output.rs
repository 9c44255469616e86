//! Power output interface.

use crate::error::Result;

/// Interface for toggleable power output channels.
pub trait PowerOutputInterface {
    /// Get whether a power output is enabled.
    fn get_power_output_enabled(&mut self, identifier: usize) -> Result<bool>;

    /// Set whether a power output is enabled.
    fn set_power_output_enabled(&mut self, identifier: usize, enabled: bool) -> Result<()>;

    /// Get the current being drawn on a power output, in amperes.
    fn get_power_output_current(&mut self, identifier: usize) -> Result<f32>;
}
