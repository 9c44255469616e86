//! Servo interface.

use crate::error::Result;

/// Servo position from `-1.0` to `1.0`; `None` means the servo is unpowered.
pub type ServoPosition = Option<f32>;

/// Servo motor interface.
pub trait ServoInterface {
    /// Get the position of a servo.
    fn get_servo_position(&mut self, identifier: usize) -> Result<ServoPosition>;

    /// Set the position of a servo.
    fn set_servo_position(&mut self, identifier: usize, position: ServoPosition) -> Result<()>;
}
