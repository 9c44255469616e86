//! Console-simulated SR v4 power board.

use crate::error::{Error, Result};
use crate::hal::battery_sensor::BatterySensorInterface;
use crate::hal::button::ButtonInterface;
use crate::hal::led::LedInterface;
use crate::hal::piezo::{PiezoInterface, Pitch};
use crate::hal::power_output::PowerOutputInterface;
use crate::hw::sr_v4::power_board::{OUTPUT_COUNT, check_output, check_single, encode_piezo};
use crate::peripheral::console::Console;
use crate::platform::Backend;
use std::sync::Arc;
use std::time::Duration;

pub struct ConsolePowerBoardBackend {
    descriptor: String,
    console: Arc<Console>,
    output_states: [bool; OUTPUT_COUNT],
    led_states: [bool; 2],
    // Set once the operator has been asked to press the button.
    awaiting_press: bool,
}

impl ConsolePowerBoardBackend {
    pub fn new(serial: &str, console: Arc<Console>) -> Self {
        Self {
            descriptor: format!("Power Board v4 - {serial}"),
            console,
            output_states: [false; OUTPUT_COUNT],
            led_states: [false; 2],
            awaiting_press: false,
        }
    }

    fn info(&self, message: &str) -> Result<()> {
        self.console.info(&self.descriptor, message)
    }

    fn read_f32(&self, prompt: &str) -> Result<f32> {
        self.console.read(&self.descriptor, prompt)
    }
}

impl Backend for ConsolePowerBoardBackend {
    fn firmware_version(&mut self) -> Result<Option<String>> {
        Ok(None)
    }
}

impl PowerOutputInterface for ConsolePowerBoardBackend {
    fn get_power_output_enabled(&mut self, identifier: usize) -> Result<bool> {
        check_output(identifier)?;
        Ok(self.output_states[identifier])
    }

    fn set_power_output_enabled(&mut self, identifier: usize, enabled: bool) -> Result<()> {
        check_output(identifier)?;
        self.info(&format!("Setting output {identifier} to {enabled}"))?;
        self.output_states[identifier] = enabled;
        Ok(())
    }

    fn get_power_output_current(&mut self, identifier: usize) -> Result<f32> {
        check_output(identifier)?;
        self.read_f32(&format!("Current for power output {identifier} [amps]"))
    }
}

impl PiezoInterface for ConsolePowerBoardBackend {
    fn buzz(&mut self, identifier: usize, duration: Duration, pitch: Pitch) -> Result<()> {
        check_single("piezo", identifier)?;
        encode_piezo(pitch.hz(), duration)?;
        self.info(&format!("Buzzing at {pitch} for {}ms", duration.as_millis()))
    }
}

impl ButtonInterface for ConsolePowerBoardBackend {
    /// Pressing the button is entering a line at the console.
    fn get_button_state(&mut self, identifier: usize) -> Result<bool> {
        check_single("button", identifier)?;
        if !self.awaiting_press {
            self.info("Hit return to press the start button")?;
            self.awaiting_press = true;
        }
        match self.console.poll_line()? {
            Some(_) => {
                self.awaiting_press = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl BatterySensorInterface for ConsolePowerBoardBackend {
    fn get_battery_sensor_voltage(&mut self, identifier: usize) -> Result<f32> {
        check_single("battery sensor", identifier)?;
        self.read_f32("Battery voltage [volts]")
    }

    fn get_battery_sensor_current(&mut self, identifier: usize) -> Result<f32> {
        check_single("battery sensor", identifier)?;
        self.read_f32("Battery current [amps]")
    }
}

impl LedInterface for ConsolePowerBoardBackend {
    fn get_led_state(&mut self, identifier: usize) -> Result<bool> {
        self.led_states
            .get(identifier)
            .copied()
            .ok_or_else(|| Error::InvalidValue(format!("Invalid LED identifier {identifier}")))
    }

    fn set_led_state(&mut self, identifier: usize, state: bool) -> Result<()> {
        if identifier >= self.led_states.len() {
            return Err(Error::InvalidValue(format!(
                "Invalid LED identifier {identifier}"
            )));
        }
        self.info(&format!("Setting LED {identifier} to {state}"))?;
        self.led_states[identifier] = state;
        Ok(())
    }
}
