//! SR v4 power board over USB control transfers.

use crate::error::{Error, Result};
use crate::hal::battery_sensor::BatterySensorInterface;
use crate::hal::button::ButtonInterface;
use crate::hal::led::LedInterface;
use crate::hal::piezo::{PiezoInterface, Pitch};
use crate::hal::power_output::PowerOutputInterface;
use crate::hw::sr_v4::power_board::{
    CMD_READ_BATTERY, CMD_READ_BUTTON, CMD_READ_FWVER, CMD_READ_OUTPUT, CMD_WRITE_ERROR_LED,
    CMD_WRITE_OUTPUT, CMD_WRITE_PIEZO, CMD_WRITE_RUN_LED, FIRMWARE_VERSION, OUTPUT_COUNT,
    ReadCommand, WriteCommand, check_output, check_single, decode_battery, decode_output_current,
    decode_u32, encode_piezo,
};
use crate::peripheral::control::ControlTransport;
use crate::platform::Backend;
use std::time::Duration;

/// Drives one power board.
///
/// The board cannot report output or LED states, so the last written
/// values are cached here.
pub struct SrV4PowerBoardBackend<T> {
    transport: T,
    output_states: [bool; OUTPUT_COUNT],
    led_states: [bool; 2],
}

impl<T: ControlTransport> SrV4PowerBoardBackend<T> {
    /// # Errors
    ///
    /// `Communication` if the board runs unsupported firmware.
    pub fn new(transport: T) -> Result<Self> {
        let mut backend = Self {
            transport,
            output_states: [false; OUTPUT_COUNT],
            led_states: [false; 2],
        };
        backend.check_firmware_version()?;
        Ok(backend)
    }

    fn check_firmware_version(&mut self) -> Result<()> {
        let version = self.read_u32(CMD_READ_FWVER)?;
        if version != FIRMWARE_VERSION {
            return Err(Error::Communication(format!(
                "Unexpected firmware version: {version}, expected {FIRMWARE_VERSION}"
            )));
        }
        Ok(())
    }

    fn read(&mut self, command: ReadCommand) -> Result<Vec<u8>> {
        self.transport.read(command.code, command.length)
    }

    fn read_u32(&mut self, command: ReadCommand) -> Result<u32> {
        let reply = self.read(command)?;
        decode_u32(&reply, 0)
    }

    fn write(&mut self, command: WriteCommand, index: u16, data: &[u8]) -> Result<()> {
        self.transport.write(command.code, index, data)
    }
}

impl<T: ControlTransport> Backend for SrV4PowerBoardBackend<T> {
    fn firmware_version(&mut self) -> Result<Option<String>> {
        self.read_u32(CMD_READ_FWVER)
            .map(|version| Some(version.to_string()))
    }
}

impl<T: ControlTransport> PowerOutputInterface for SrV4PowerBoardBackend<T> {
    fn get_power_output_enabled(&mut self, identifier: usize) -> Result<bool> {
        check_output(identifier)?;
        Ok(self.output_states[identifier])
    }

    fn set_power_output_enabled(&mut self, identifier: usize, enabled: bool) -> Result<()> {
        check_output(identifier)?;
        self.write(CMD_WRITE_OUTPUT[identifier], enabled as u16, &[])?;
        self.output_states[identifier] = enabled;
        Ok(())
    }

    fn get_power_output_current(&mut self, identifier: usize) -> Result<f32> {
        check_output(identifier)?;
        let reply = self.read(CMD_READ_OUTPUT[identifier])?;
        decode_output_current(&reply)
    }
}

impl<T: ControlTransport> PiezoInterface for SrV4PowerBoardBackend<T> {
    fn buzz(&mut self, identifier: usize, duration: Duration, pitch: Pitch) -> Result<()> {
        check_single("piezo", identifier)?;
        let payload = encode_piezo(pitch.hz(), duration)?;
        self.write(CMD_WRITE_PIEZO, 0, &payload)
    }
}

impl<T: ControlTransport> ButtonInterface for SrV4PowerBoardBackend<T> {
    fn get_button_state(&mut self, identifier: usize) -> Result<bool> {
        check_single("button", identifier)?;
        Ok(self.read_u32(CMD_READ_BUTTON)? != 0)
    }
}

impl<T: ControlTransport> BatterySensorInterface for SrV4PowerBoardBackend<T> {
    fn get_battery_sensor_voltage(&mut self, identifier: usize) -> Result<f32> {
        check_single("battery sensor", identifier)?;
        let reply = self.read(CMD_READ_BATTERY)?;
        decode_battery(&reply).map(|(_, voltage)| voltage)
    }

    fn get_battery_sensor_current(&mut self, identifier: usize) -> Result<f32> {
        check_single("battery sensor", identifier)?;
        let reply = self.read(CMD_READ_BATTERY)?;
        decode_battery(&reply).map(|(current, _)| current)
    }
}

impl<T: ControlTransport> LedInterface for SrV4PowerBoardBackend<T> {
    fn get_led_state(&mut self, identifier: usize) -> Result<bool> {
        self.led_states
            .get(identifier)
            .copied()
            .ok_or_else(|| Error::InvalidValue(format!("Invalid LED identifier {identifier}")))
    }

    fn set_led_state(&mut self, identifier: usize, state: bool) -> Result<()> {
        let command = match identifier {
            0 => CMD_WRITE_RUN_LED,
            1 => CMD_WRITE_ERROR_LED,
            _ => {
                return Err(Error::InvalidValue(format!(
                    "Invalid LED identifier {identifier}"
                )));
            }
        };
        self.write(command, state as u16, &[])?;
        self.led_states[identifier] = state;
        Ok(())
    }
}
