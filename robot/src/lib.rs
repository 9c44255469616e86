//! Student-facing robot API.
//!
//! A [`Robot`] finds every board its environment can reach and exposes them
//! by role:
//!
//! ```no_run
//! use robot::{Robot, RobotConfig};
//!
//! # fn main() -> robot::drivers::Result<()> {
//! let r = Robot::from_config(&RobotConfig::from_env()?)?;
//! r.power_board().outputs().power_on()?;
//! r.motor_boards()[0].motors()[1].set_power(0.5)?;
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use config::{EnvironmentKind, RobotConfig};
pub use drivers;

use drivers::board::{Board, BoardGroup};
use drivers::boards::sr_v4::{MotorBoard, PowerBoard};
use drivers::platform::{console_environment, hardware_environment};
use drivers::{Environment, Result};

pub struct Robot {
    power_boards: BoardGroup<PowerBoard>,
    motor_boards: BoardGroup<MotorBoard>,
    environment: Environment,
}

impl Robot {
    /// Discover every board in `environment` and power on the power board.
    ///
    /// # Errors
    ///
    /// `NotSingular` unless exactly one power board is found.
    pub fn new(environment: Environment) -> Result<Self> {
        log::info!("Initialising robot in {}", environment.name());

        let power_boards = BoardGroup::<PowerBoard>::from_environment(&environment)?;
        power_boards.singular()?;
        let motor_boards = BoardGroup::<MotorBoard>::from_environment(&environment)?;

        for board in power_boards.iter() {
            log_board(board);
        }
        for board in motor_boards.iter() {
            log_board(board);
        }

        let robot = Self {
            power_boards,
            motor_boards,
            environment,
        };
        robot.power_board().outputs().power_on()?;
        Ok(robot)
    }

    pub fn from_config(config: &RobotConfig) -> Result<Self> {
        let environment = match config.environment {
            EnvironmentKind::Hardware => hardware_environment(&config.hardware),
            EnvironmentKind::Console => console_environment(&config.console)?,
        };
        Self::new(environment)
    }

    pub fn power_board(&self) -> &PowerBoard {
        // Exactly one, checked in `new`.
        &self.power_boards[0]
    }

    pub fn motor_boards(&self) -> &BoardGroup<MotorBoard> {
        &self.motor_boards
    }

    /// The only motor board.
    pub fn motor_board(&self) -> Result<&MotorBoard> {
        self.motor_boards.singular()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Flash the run LED until the start button is pressed.
    pub fn wait_start(&self) -> Result<()> {
        log::info!("Waiting for start button");
        self.power_board().wait_for_start_flash()?;
        log::info!("Starting");
        Ok(())
    }

    /// Stop every motor, then switch off every power output.
    ///
    /// Both groups are attempted even if the first fails.
    pub fn make_safe(&self) -> Result<()> {
        let motors = self.motor_boards.make_safe();
        let power = self.power_boards.make_safe();
        motors.and(power)
    }
}

impl Drop for Robot {
    fn drop(&mut self) {
        if let Err(e) = self.make_safe() {
            log::error!("Failed to make robot safe: {}", e);
        }
    }
}

fn log_board(board: &impl Board) {
    match board.firmware_version() {
        Ok(Some(version)) => log::info!(
            "Found {} {} (firmware {})",
            board.name(),
            board.serial(),
            version
        ),
        Ok(None) => log::info!("Found {} {}", board.name(), board.serial()),
        Err(e) => log::warn!(
            "Found {} {} but could not read its firmware version: {}",
            board.name(),
            board.serial(),
            e
        ),
    }
}
