use super::{Component, Components};
use crate::error::{Error, Result};
use crate::hal::servo::{ServoInterface, ServoPosition};
use crate::sync::Shared;

/// A standard servomotor.
pub struct Servo<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: ServoInterface + ?Sized> Servo<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    /// Current position, or `None` if the servo is unpowered.
    pub fn position(&self) -> Result<ServoPosition> {
        self.backend.lock().get_servo_position(self.identifier)
    }

    /// Move the servo, or power it down with `None`.
    pub fn set_position(&self, position: ServoPosition) -> Result<()> {
        if let Some(position) = position {
            if !(-1.0..=1.0).contains(&position) {
                return Err(Error::InvalidValue(format!(
                    "Servo position {position} must be between -1 and 1"
                )));
            }
        }
        self.backend
            .lock()
            .set_servo_position(self.identifier, position)
    }
}

impl<B: ServoInterface + ?Sized> Component for Servo<B> {
    const KIND: Components = Components::SERVO;

    fn interface_name() -> &'static str {
        "ServoInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}
