//! Robot configuration from the process environment.

use drivers::platform::{ConsoleConfig, HardwareConfig};
use drivers::{Error, Result};
use std::str::FromStr;

pub const ENVIRONMENT_VAR: &str = "ROBOT_ENVIRONMENT";
pub const POWER_BOARD_SERIAL_VAR: &str = "ROBOT_POWER_BOARD_SERIAL";
pub const MOTOR_BOARD_SERIALS_VAR: &str = "ROBOT_MOTOR_BOARD_SERIALS";

/// Where the robot's boards live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentKind {
    #[default]
    Hardware,
    Console,
}

impl FromStr for EnvironmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hardware" => Ok(EnvironmentKind::Hardware),
            "console" => Ok(EnvironmentKind::Console),
            other => Err(Error::InvalidValue(format!(
                "Unknown environment {other:?}, expected \"hardware\" or \"console\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RobotConfig {
    pub environment: EnvironmentKind,
    pub hardware: HardwareConfig,
    pub console: ConsoleConfig,
}

impl RobotConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(environment) = lookup(ENVIRONMENT_VAR) {
            config.environment = environment.parse()?;
        }
        if let Some(serial) = lookup(POWER_BOARD_SERIAL_VAR) {
            config.console.power_board_serial = serial;
        }
        if let Some(serials) = lookup(MOTOR_BOARD_SERIALS_VAR) {
            config.console.motor_board_serials = serials
                .split(',')
                .map(str::trim)
                .filter(|serial| !serial.is_empty())
                .map(str::to_owned)
                .collect();
        }
        log::debug!("Robot configuration: {:?}", config);
        Ok(config)
    }
}
