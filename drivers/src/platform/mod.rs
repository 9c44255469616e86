//! Platform Abstraction Layer
//!
//! An [`Environment`] maps board types to the backends that drive them. The
//! same student code runs against real hardware or a simulated console by
//! picking a different environment.
//!
//! # Usage
//!
//! ```no_run
//! use drivers::board::BoardGroup;
//! use drivers::boards::sr_v4::MotorBoard;
//! use drivers::platform::{ConsoleConfig, console_environment};
//!
//! # fn main() -> drivers::Result<()> {
//! let env = console_environment(&ConsoleConfig::default())?;
//! let motor_boards = BoardGroup::<MotorBoard>::from_environment(&env)?;
//! motor_boards[0].motors()[1].set_power(0.5)?;
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod hardware;

use crate::board::Board;
use crate::error::{Error, Result};
use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::time::Duration;

pub use console::{console_environment, console_environment_with};
pub use hardware::hardware_environment;

/// Common behaviour of every backend.
pub trait Backend: Send {
    /// Firmware version reported by the board, if it reports one.
    fn firmware_version(&mut self) -> Result<Option<String>>;
}

type Discover<B> = Box<dyn Fn() -> Result<Vec<B>> + Send + Sync>;

/// A named collection of backends, one per board type.
pub struct Environment {
    name: String,
    backends: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backends: HashMap::new(),
        }
    }

    /// Register the discovery function for boards of type `B`.
    ///
    /// A later registration for the same board type replaces the earlier one.
    pub fn with_backend<B, F>(mut self, discover: F) -> Self
    where
        B: Board + 'static,
        F: Fn() -> Result<Vec<B>> + Send + Sync + 'static,
    {
        let discover: Discover<B> = Box::new(discover);
        self.backends.insert(TypeId::of::<B>(), Box::new(discover));
        self
    }

    pub fn supports<B: Board + 'static>(&self) -> bool {
        self.backends.contains_key(&TypeId::of::<B>())
    }

    /// Find every board of type `B` this environment can reach.
    ///
    /// # Errors
    ///
    /// `NoBackend` if nothing is registered for `B`, otherwise whatever
    /// discovery fails with.
    pub fn discover<B: Board + 'static>(&self) -> Result<Vec<B>> {
        let discover = self
            .backends
            .get(&TypeId::of::<B>())
            .and_then(|backend| backend.downcast_ref::<Discover<B>>())
            .ok_or_else(|| Error::NoBackend {
                board: B::board_name(),
                environment: self.name.clone(),
            })?;
        log::debug!("Discovering {} in {}", B::board_name(), self.name);
        discover()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Debug for Environment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("name", &self.name)
            .field("backends", &self.backends.len())
            .finish()
    }
}

/// Settings for talking to real boards.
#[derive(Debug, Clone)]
pub struct HardwareConfig {
    /// Baud rate of motor board serial links.
    pub serial_baud_rate: u32,
    /// How long to wait for a serial reply.
    pub serial_timeout: Duration,
    /// How long to wait for a USB control transfer.
    pub usb_timeout: Duration,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            serial_baud_rate: crate::hw::sr_v4::motor_board::BAUD_RATE,
            serial_timeout: Duration::from_millis(250),
            usb_timeout: Duration::from_millis(1000),
        }
    }
}

/// Settings for boards simulated at a console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub power_board_serial: String,
    pub motor_board_serials: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            power_board_serial: "SERIAL".into(),
            motor_board_serials: vec!["SERIAL0".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Components;

    struct MockBoard(String);

    impl Board for MockBoard {
        fn board_name() -> &'static str {
            "Mock Board"
        }

        fn supported_components() -> Components {
            Components::empty()
        }

        fn name(&self) -> &'static str {
            "Mock Board"
        }

        fn serial(&self) -> &str {
            &self.0
        }

        fn firmware_version(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn make_safe(&self) -> Result<()> {
            Ok(())
        }
    }

    struct OtherBoard;

    impl Board for OtherBoard {
        fn board_name() -> &'static str {
            "Other Board"
        }

        fn supported_components() -> Components {
            Components::empty()
        }

        fn name(&self) -> &'static str {
            "Other Board"
        }

        fn serial(&self) -> &str {
            "OTHER"
        }

        fn firmware_version(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn make_safe(&self) -> Result<()> {
            Ok(())
        }
    }

    fn environment() -> Environment {
        Environment::new("MockEnvironment")
            .with_backend(|| Ok(vec![MockBoard("A".into()), MockBoard("B".into())]))
    }

    #[test]
    fn discovers_registered_boards() {
        let env = environment();
        assert_eq!(env.name(), "MockEnvironment");
        assert!(env.supports::<MockBoard>());

        let boards = env.discover::<MockBoard>().unwrap();
        let serials: Vec<_> = boards.iter().map(|b| b.serial()).collect();
        assert_eq!(serials, ["A", "B"]);
    }

    #[test]
    fn missing_backend_names_board_and_environment() {
        let env = environment();
        assert!(!env.supports::<OtherBoard>());
        match env.discover::<OtherBoard>() {
            Err(Error::NoBackend { board, environment }) => {
                assert_eq!(board, "Other Board");
                assert_eq!(environment, "MockEnvironment");
            }
            other => panic!("unexpected {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn discovery_errors_propagate() {
        let env = Environment::new("Broken").with_backend::<MockBoard, _>(|| {
            Err(Error::Communication("no reply".into()))
        });
        assert!(matches!(
            env.discover::<MockBoard>(),
            Err(Error::Communication(_))
        ));
    }
}
