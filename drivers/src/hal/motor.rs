//! Motor interface.

use crate::error::{Error, Result};
use core::fmt;

/// State of a motor output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MotorState {
    /// Drive at a fraction of full speed, from `-1.0` (full reverse) to
    /// `1.0` (full forward).
    Speed(f32),
    /// Disconnect the motor and let it spin freely.
    Coast,
    /// Short the motor terminals to stop it quickly.
    Brake,
}

impl MotorState {
    /// Build a speed from a percentage of full power.
    ///
    /// Values outside `-100..=100` are rejected.
    pub fn from_percent(percent: i32) -> Result<Self> {
        if percent.abs() > 100 {
            return Err(Error::InvalidValue(format!(
                "Motor power {percent} out of range, should be between -100 and 100"
            )));
        }
        Ok(MotorState::Speed(percent as f32 / 100.0))
    }

    /// Check that a speed is within `[-1, 1]`.
    pub fn validate(self) -> Result<Self> {
        match self {
            MotorState::Speed(speed) if !(-1.0..=1.0).contains(&speed) => Err(
                Error::InvalidValue(format!("Motor speed {speed} must be between -1 and 1")),
            ),
            state => Ok(state),
        }
    }
}

impl From<f32> for MotorState {
    fn from(speed: f32) -> Self {
        MotorState::Speed(speed)
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorState::Speed(speed) => write!(f, "{speed}"),
            MotorState::Coast => f.write_str("COAST"),
            MotorState::Brake => f.write_str("BRAKE"),
        }
    }
}

/// Motor output interface.
pub trait MotorInterface {
    /// Get the current state of a motor.
    fn get_motor_state(&mut self, identifier: usize) -> Result<MotorState>;

    /// Set the state of a motor.
    fn set_motor_state(&mut self, identifier: usize, state: MotorState) -> Result<()>;
}
