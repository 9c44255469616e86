//! Student Robotics v4 Motor Board serial protocol.
//!
//! Commands are single bytes, optionally followed by one argument byte.
//! The version command replies with a newline-terminated `MCV4B:<n>` line.

use crate::error::{Error, Result};
use crate::hal::motor::MotorState;

/// FTDI bridge used by the board.
pub const VENDOR_ID: u16 = 0x0403;
pub const PRODUCT_ID: u16 = 0x6001;

pub const BAUD_RATE: u32 = 1_000_000;

/// Firmware version this protocol describes.
pub const FIRMWARE_VERSION: &str = "3";
pub const MODEL: &str = "MCV4B";

pub const MOTOR_COUNT: usize = 2;

pub const CMD_RESET: u8 = 0;
pub const CMD_VERSION: u8 = 1;
pub const CMD_MOTOR: [u8; MOTOR_COUNT] = [2, 3];
pub const CMD_BOOTLOADER: u8 = 4;

pub const SPEED_COAST: u8 = 1;
pub const SPEED_BRAKE: u8 = 2;

/// Encode a motor state as its argument byte.
///
/// Speeds map linearly onto `3..=253`, centred on 128.
pub fn encode_state(state: MotorState) -> Result<u8> {
    match state.validate()? {
        MotorState::Coast => Ok(SPEED_COAST),
        MotorState::Brake => Ok(SPEED_BRAKE),
        MotorState::Speed(speed) => Ok(((speed * 125.0).round() as i16 + 128) as u8),
    }
}

/// Command bytes setting `motor` to `state`.
pub fn motor_command(motor: usize, state: MotorState) -> Result<[u8; 2]> {
    let command = CMD_MOTOR.get(motor).copied().ok_or_else(|| {
        Error::NotSupportedByHardware(format!(
            "Motor board has {MOTOR_COUNT} motors, there is no motor {motor}"
        ))
    })?;
    Ok([command, encode_state(state)?])
}

/// Extract the firmware version from a version reply such as `MCV4B:3`.
pub fn parse_version(reply: &str) -> Result<&str> {
    let reply = reply.trim();
    match reply.split_once(':') {
        Some((MODEL, version)) => Ok(version),
        _ => Err(Error::Communication(format!(
            "Unexpected version reply from motor board: {reply:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MotorState::Speed(0.0), 128)]
    #[case(MotorState::Speed(1.0), 253)]
    #[case(MotorState::Speed(-1.0), 3)]
    #[case(MotorState::Speed(0.4), 178)]
    #[case(MotorState::Speed(-0.4), 78)]
    #[case(MotorState::Coast, SPEED_COAST)]
    #[case(MotorState::Brake, SPEED_BRAKE)]
    fn state_encoding(#[case] state: MotorState, #[case] expected: u8) {
        assert_eq!(encode_state(state).unwrap(), expected);
    }

    #[test]
    fn out_of_range_speed_is_rejected() {
        assert!(matches!(
            encode_state(MotorState::Speed(-1.2)),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn motor_command_bytes() {
        assert_eq!(motor_command(1, MotorState::Brake).unwrap(), [3, SPEED_BRAKE]);
        assert!(matches!(
            motor_command(2, MotorState::Brake),
            Err(Error::NotSupportedByHardware(_))
        ));
    }

    #[test]
    fn version_reply() {
        assert_eq!(parse_version("MCV4B:3\n").unwrap(), "3");
        assert!(parse_version("garbage").is_err());
        assert!(parse_version("OTHER:3").is_err());
    }
}
