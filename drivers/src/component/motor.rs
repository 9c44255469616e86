use super::{Component, Components};
use crate::error::Result;
use crate::hal::motor::{MotorInterface, MotorState};
use crate::sync::Shared;

/// A motor output.
pub struct Motor<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: MotorInterface + ?Sized> Motor<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    pub fn state(&self) -> Result<MotorState> {
        self.backend.lock().get_motor_state(self.identifier)
    }

    /// Set the motor state. Speeds outside `[-1, 1]` are rejected.
    pub fn set_state(&self, state: MotorState) -> Result<()> {
        let state = state.validate()?;
        self.backend.lock().set_motor_state(self.identifier, state)
    }

    /// Drive at `speed`, a fraction of full power.
    pub fn set_power(&self, speed: f32) -> Result<()> {
        self.set_state(MotorState::Speed(speed))
    }
}

impl<B: MotorInterface + ?Sized> Component for Motor<B> {
    const KIND: Components = Components::MOTOR;

    fn interface_name() -> &'static str {
        "MotorInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sync::shared;

    struct MockMotorDriver {
        states: [MotorState; 2],
        writes: usize,
    }

    impl MotorInterface for MockMotorDriver {
        fn get_motor_state(&mut self, identifier: usize) -> Result<MotorState> {
            Ok(self.states[identifier])
        }

        fn set_motor_state(&mut self, identifier: usize, state: MotorState) -> Result<()> {
            self.states[identifier] = state;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn motor_state_round_trips_through_backend() {
        let driver = shared(MockMotorDriver {
            states: [MotorState::Brake; 2],
            writes: 0,
        });
        let motor = Motor::new(1, driver.clone());

        motor.set_power(-0.5).unwrap();
        assert_eq!(motor.state().unwrap(), MotorState::Speed(-0.5));
        motor.set_state(MotorState::Coast).unwrap();
        assert_eq!(driver.lock().states, [MotorState::Brake, MotorState::Coast]);
    }

    #[test]
    fn out_of_range_speed_never_reaches_backend() {
        let driver = shared(MockMotorDriver {
            states: [MotorState::Brake; 2],
            writes: 0,
        });
        let motor = Motor::new(0, driver.clone());

        assert!(matches!(motor.set_power(1.5), Err(Error::InvalidValue(_))));
        assert!(matches!(motor.set_power(f32::NAN), Err(Error::InvalidValue(_))));
        assert_eq!(driver.lock().writes, 0);
    }
}
