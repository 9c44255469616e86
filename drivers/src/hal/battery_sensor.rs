//! Battery sensor interface.

use crate::error::Result;

/// Interface for reading data from a battery sensor.
pub trait BatterySensorInterface {
    /// Get the battery voltage, in volts.
    fn get_battery_sensor_voltage(&mut self, identifier: usize) -> Result<f32>;

    /// Get the current drawn from the battery, in amperes.
    fn get_battery_sensor_current(&mut self, identifier: usize) -> Result<f32>;
}
