//! Student Robotics v4 Power Board.

use crate::board::Board;
use crate::component::{
    BatterySensor, Button, Components, Led, Piezo, PowerOutput, PowerOutputGroup,
};
use crate::device_manager::BoardClaim;
use crate::error::Result;
use crate::hal::battery_sensor::BatterySensorInterface;
use crate::hal::button::ButtonInterface;
use crate::hal::led::LedInterface;
use crate::hal::piezo::PiezoInterface;
use crate::hal::power_output::PowerOutputInterface;
use crate::platform::Backend;
use crate::sync::Shared;
use core::fmt;
use std::thread;
use std::time::Duration;

const START_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Polls between run LED toggles while waiting for start.
const START_FLASH_POLLS: usize = 6;

pub const RUN_LED: usize = 0;
pub const ERROR_LED: usize = 1;

/// Power outputs by name. The discriminants are the wire identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PowerOutputPosition {
    H0 = 0,
    H1 = 1,
    L0 = 2,
    L1 = 3,
    L2 = 4,
    L3 = 5,
}

impl PowerOutputPosition {
    pub const ALL: [PowerOutputPosition; 6] = [
        PowerOutputPosition::H0,
        PowerOutputPosition::H1,
        PowerOutputPosition::L0,
        PowerOutputPosition::L1,
        PowerOutputPosition::L2,
        PowerOutputPosition::L3,
    ];

    pub fn identifier(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PowerOutputPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything a backend must drive for a power board.
pub trait PowerBoardBackend:
    Backend
    + PowerOutputInterface
    + PiezoInterface
    + ButtonInterface
    + BatterySensorInterface
    + LedInterface
{
}

impl<T> PowerBoardBackend for T where
    T: Backend
        + PowerOutputInterface
        + PiezoInterface
        + ButtonInterface
        + BatterySensorInterface
        + LedInterface
        + ?Sized
{
}

/// Student Robotics v4 Power Board.
pub struct PowerBoard {
    serial: String,
    backend: Shared<dyn PowerBoardBackend>,
    outputs: PowerOutputGroup<PowerOutputPosition, dyn PowerBoardBackend>,
    piezo: Piezo<dyn PowerBoardBackend>,
    start_button: Button<dyn PowerBoardBackend>,
    battery_sensor: BatterySensor<dyn PowerBoardBackend>,
    run_led: Led<dyn PowerBoardBackend>,
    error_led: Led<dyn PowerBoardBackend>,
    _claim: BoardClaim,
}

impl PowerBoard {
    /// # Errors
    ///
    /// `BoardInUse` if another live `PowerBoard` has this serial number.
    pub fn new(serial: impl Into<String>, backend: Shared<dyn PowerBoardBackend>) -> Result<Self> {
        let serial = serial.into();
        let claim = BoardClaim::acquire(Self::board_name(), &serial)?;

        let outputs = PowerOutputGroup::new(PowerOutputPosition::ALL.map(|position| {
            (position, PowerOutput::new(position.identifier(), backend.clone()))
        }));

        Ok(Self {
            outputs,
            piezo: Piezo::new(0, backend.clone()),
            start_button: Button::new(0, backend.clone()),
            battery_sensor: BatterySensor::new(0, backend.clone()),
            run_led: Led::new(RUN_LED, backend.clone()),
            error_led: Led::new(ERROR_LED, backend.clone()),
            backend,
            serial,
            _claim: claim,
        })
    }

    pub fn outputs(&self) -> &PowerOutputGroup<PowerOutputPosition, dyn PowerBoardBackend> {
        &self.outputs
    }

    pub fn piezo(&self) -> &Piezo<dyn PowerBoardBackend> {
        &self.piezo
    }

    pub fn start_button(&self) -> &Button<dyn PowerBoardBackend> {
        &self.start_button
    }

    pub fn battery_sensor(&self) -> &BatterySensor<dyn PowerBoardBackend> {
        &self.battery_sensor
    }

    pub fn run_led(&self) -> &Led<dyn PowerBoardBackend> {
        &self.run_led
    }

    pub fn error_led(&self) -> &Led<dyn PowerBoardBackend> {
        &self.error_led
    }

    /// Wait for the start button, flashing the run LED meanwhile.
    pub fn wait_for_start_flash(&self) -> Result<()> {
        let mut polls = 0;
        let mut led_state = false;
        while !self.start_button.is_pressed()? {
            if polls % START_FLASH_POLLS == 0 {
                led_state = !led_state;
                self.run_led.set_state(led_state)?;
            }
            thread::sleep(START_POLL_INTERVAL);
            polls += 1;
        }
        log::info!("Start button pressed on {}", self.serial);
        Ok(())
    }
}

impl Board for PowerBoard {
    fn board_name() -> &'static str {
        "Student Robotics v4 Power Board"
    }

    fn supported_components() -> Components {
        Components::POWER_OUTPUT
            | Components::PIEZO
            | Components::BUTTON
            | Components::BATTERY_SENSOR
            | Components::LED
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

    fn make_safe(&self) -> Result<()> {
        self.outputs.power_off()
    }
}

impl fmt::Debug for PowerBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerBoard")
            .field("serial", &self.serial)
            .finish_non_exhaustive()
    }
}
