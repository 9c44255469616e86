//! Console-simulated SR v4 motor board.

use crate::error::{Error, Result};
use crate::hal::motor::{MotorInterface, MotorState};
use crate::hw::sr_v4::motor_board::MOTOR_COUNT;
use crate::peripheral::console::Console;
use crate::platform::Backend;
use std::sync::Arc;

pub struct ConsoleMotorBoardBackend {
    descriptor: String,
    console: Arc<Console>,
    states: [MotorState; MOTOR_COUNT],
}

impl ConsoleMotorBoardBackend {
    pub fn new(serial: &str, console: Arc<Console>) -> Self {
        Self {
            descriptor: format!("Motor Board v4 - {serial}"),
            console,
            states: [MotorState::Brake; MOTOR_COUNT],
        }
    }
}

impl Backend for ConsoleMotorBoardBackend {
    fn firmware_version(&mut self) -> Result<Option<String>> {
        Ok(None)
    }
}

impl MotorInterface for ConsoleMotorBoardBackend {
    fn get_motor_state(&mut self, identifier: usize) -> Result<MotorState> {
        self.states.get(identifier).copied().ok_or_else(|| {
            Error::NotSupportedByHardware(format!("There is no motor {identifier}"))
        })
    }

    fn set_motor_state(&mut self, identifier: usize, state: MotorState) -> Result<()> {
        let state = state.validate()?;
        let slot = self.states.get_mut(identifier).ok_or_else(|| {
            Error::NotSupportedByHardware(format!("There is no motor {identifier}"))
        })?;
        *slot = state;
        self.console
            .info(&self.descriptor, &format!("Setting motor {identifier} to {state}"))
    }
}
