//! Student Robotics v4 Power Board USB protocol.
//!
//! All traffic is vendor control requests. `wValue` carries the command
//! code, reads return little-endian `u32` fields and writes carry their
//! argument in `wIndex` or the data stage.

use crate::error::{Error, Result};
use std::time::Duration;

pub const VENDOR_ID: u16 = 0x1bda;
pub const PRODUCT_ID: u16 = 0x0010;

/// Firmware version this protocol describes.
pub const FIRMWARE_VERSION: u32 = 3;

/// `bRequest` for every command.
pub const REQUEST: u8 = 64;
pub const REQUEST_TYPE_READ: u8 = 0xc0;
pub const REQUEST_TYPE_WRITE: u8 = 0x40;

pub const OUTPUT_COUNT: usize = 6;

/// A read command: code and reply length in bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReadCommand {
    pub code: u16,
    pub length: usize,
}

/// A write command code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WriteCommand {
    pub code: u16,
}

const fn read(code: u16, length: usize) -> ReadCommand {
    ReadCommand { code, length }
}

pub const CMD_READ_OUTPUT: [ReadCommand; OUTPUT_COUNT] = [
    read(0, 4),
    read(1, 4),
    read(2, 4),
    read(3, 4),
    read(4, 4),
    read(5, 4),
];
pub const CMD_READ_5V_RAIL: ReadCommand = read(6, 4);
pub const CMD_READ_BATTERY: ReadCommand = read(7, 8);
pub const CMD_READ_BUTTON: ReadCommand = read(8, 4);
pub const CMD_READ_FWVER: ReadCommand = read(9, 4);

pub const CMD_WRITE_OUTPUT: [WriteCommand; OUTPUT_COUNT] = [
    WriteCommand { code: 0 },
    WriteCommand { code: 1 },
    WriteCommand { code: 2 },
    WriteCommand { code: 3 },
    WriteCommand { code: 4 },
    WriteCommand { code: 5 },
];
pub const CMD_WRITE_RUN_LED: WriteCommand = WriteCommand { code: 6 };
pub const CMD_WRITE_ERROR_LED: WriteCommand = WriteCommand { code: 7 };
pub const CMD_WRITE_PIEZO: WriteCommand = WriteCommand { code: 8 };

/// Check a power output identifier.
pub fn check_output(identifier: usize) -> Result<()> {
    if identifier >= OUTPUT_COUNT {
        return Err(Error::InvalidValue(format!(
            "Invalid power output identifier {identifier}, must be below {OUTPUT_COUNT}"
        )));
    }
    Ok(())
}

/// Check the identifier of a component the board has only one of.
pub fn check_single(kind: &str, identifier: usize) -> Result<()> {
    if identifier != 0 {
        return Err(Error::InvalidValue(format!(
            "Invalid {kind} identifier {identifier}, the power board has one"
        )));
    }
    Ok(())
}

/// Decode the `index`th little-endian `u32` of a reply.
pub fn decode_u32(reply: &[u8], index: usize) -> Result<u32> {
    let start = index * 4;
    reply
        .get(start..start + 4)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| {
            Error::Communication(format!(
                "Reply of {} bytes has no field {}",
                reply.len(),
                index
            ))
        })
}

/// Decode a battery reply into `(current A, voltage V)`.
pub fn decode_battery(reply: &[u8]) -> Result<(f32, f32)> {
    let current_ma = decode_u32(reply, 0)?;
    let voltage_mv = decode_u32(reply, 1)?;
    Ok((milli(current_ma), milli(voltage_mv)))
}

/// Decode an output current reply, in amperes.
pub fn decode_output_current(reply: &[u8]) -> Result<f32> {
    decode_u32(reply, 0).map(milli)
}

/// Encode a piezo request: frequency then duration, both `u16`.
pub fn encode_piezo(frequency_hz: f32, duration: Duration) -> Result<[u8; 4]> {
    let frequency = frequency_hz.round();
    if !(1.0..=u16::MAX as f32).contains(&frequency) {
        return Err(Error::InvalidValue(format!(
            "Frequency {frequency_hz}Hz is out of range for the power board"
        )));
    }
    let duration_ms = u16::try_from(duration.as_millis()).map_err(|_| {
        Error::InvalidValue(format!(
            "Duration {}ms is too long for the power board, maximum is {}ms",
            duration.as_millis(),
            u16::MAX
        ))
    })?;

    let mut payload = [0u8; 4];
    payload[..2].copy_from_slice(&(frequency as u16).to_le_bytes());
    payload[2..].copy_from_slice(&duration_ms.to_le_bytes());
    Ok(payload)
}

fn milli(value: u32) -> f32 {
    value as f32 / 1000.0
}
