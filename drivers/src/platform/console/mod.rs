//! Backends for boards simulated at a text console.

mod motor_board;
mod power_board;

pub use motor_board::ConsoleMotorBoardBackend;
pub use power_board::ConsolePowerBoardBackend;

use super::{ConsoleConfig, Environment};
use crate::boards::sr_v4::{MotorBoard, PowerBoard};
use crate::peripheral::console::Console;
use crate::error::Result;
use crate::sync::shared;
use std::sync::Arc;

pub const CONSOLE_ENVIRONMENT: &str = "ConsoleEnvironment";

/// A console environment on standard input and output.
///
/// # Errors
///
/// `Io` if the console's input thread cannot be started.
pub fn console_environment(config: &ConsoleConfig) -> Result<Environment> {
    Ok(console_environment_with(Arc::new(Console::stdio()?), config))
}

/// A console environment on the given console, shared by every simulated board.
pub fn console_environment_with(console: Arc<Console>, config: &ConsoleConfig) -> Environment {
    let power_console = console.clone();
    let power_serial = config.power_board_serial.clone();
    let motor_serials = config.motor_board_serials.clone();

    Environment::new(CONSOLE_ENVIRONMENT)
        .with_backend(move || {
            let backend = ConsolePowerBoardBackend::new(&power_serial, power_console.clone());
            Ok(vec![PowerBoard::new(power_serial.clone(), shared(backend))?])
        })
        .with_backend::<MotorBoard, _>(move || {
            motor_serials
                .iter()
                .map(|serial| {
                    let backend = ConsoleMotorBoardBackend::new(serial, console.clone());
                    MotorBoard::new(serial.clone(), shared(backend))
                })
                .collect()
        })
}
