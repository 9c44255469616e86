//! Student Robotics v4 Motor Board.

use crate::board::Board;
use crate::component::{Components, Motor};
use crate::device_manager::BoardClaim;
use crate::error::Result;
use crate::hal::motor::{MotorInterface, MotorState};
use crate::platform::Backend;
use crate::sync::Shared;
use core::fmt;

/// Everything a backend must drive for a motor board.
pub trait MotorBoardBackend: Backend + MotorInterface {}

impl<T: Backend + MotorInterface + ?Sized> MotorBoardBackend for T {}

/// Student Robotics v4 Motor Board, with two motor outputs.
pub struct MotorBoard {
    serial: String,
    backend: Shared<dyn MotorBoardBackend>,
    motors: [Motor<dyn MotorBoardBackend>; 2],
    _claim: BoardClaim,
}

impl MotorBoard {
    /// # Errors
    ///
    /// `BoardInUse` if another live `MotorBoard` has this serial number.
    pub fn new(serial: impl Into<String>, backend: Shared<dyn MotorBoardBackend>) -> Result<Self> {
        let serial = serial.into();
        let claim = BoardClaim::acquire(Self::board_name(), &serial)?;

        Ok(Self {
            motors: [Motor::new(0, backend.clone()), Motor::new(1, backend.clone())],
            backend,
            serial,
            _claim: claim,
        })
    }

    pub fn motors(&self) -> &[Motor<dyn MotorBoardBackend>] {
        &self.motors
    }
}

impl Board for MotorBoard {
    fn board_name() -> &'static str {
        "Student Robotics v4 Motor Board"
    }

    fn supported_components() -> Components {
        Components::MOTOR
    }

    fn name(&self) -> &'static str {
        Self::board_name()
    }

    fn serial(&self) -> &str {
        &self.serial
    }

    fn firmware_version(&self) -> Result<Option<String>> {
        self.backend.lock().firmware_version()
    }

    /// Brake every motor, attempting all of them.
    fn make_safe(&self) -> Result<()> {
        let mut result = Ok(());
        for motor in &self.motors {
            if let Err(e) = motor.set_state(MotorState::Brake) {
                log::warn!("Failed to brake motor on {}: {}", self.serial, e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

impl fmt::Debug for MotorBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotorBoard")
            .field("serial", &self.serial)
            .finish_non_exhaustive()
    }
}
