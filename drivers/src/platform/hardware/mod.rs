//! Backends for real boards.

mod motor_board;
mod power_board;

pub use motor_board::SrV4MotorBoardBackend;
pub use power_board::SrV4PowerBoardBackend;

use super::{Environment, HardwareConfig};
use crate::boards::sr_v4::{MotorBoard, PowerBoard};
use crate::error::Result;

pub const HARDWARE_ENVIRONMENT: &str = "HardwareEnvironment";

/// An environment reaching every board attached to this machine.
///
/// Board types whose transport is compiled out are still registered, but
/// discovering them fails with `NotSupportedByHardware`.
pub fn hardware_environment(config: &HardwareConfig) -> Environment {
    let power_config = config.clone();
    let motor_config = config.clone();
    Environment::new(HARDWARE_ENVIRONMENT)
        .with_backend(move || discover_power_boards(&power_config))
        .with_backend(move || discover_motor_boards(&motor_config))
}

cfg_if::cfg_if! {
    if #[cfg(feature = "usb")] {
        fn discover_power_boards(config: &HardwareConfig) -> Result<Vec<PowerBoard>> {
            use crate::hw::sr_v4::power_board::{PRODUCT_ID, REQUEST, VENDOR_ID};
            use crate::peripheral::control::find_usb_devices;
            use crate::sync::shared;

            find_usb_devices(VENDOR_ID, PRODUCT_ID, REQUEST, config.usb_timeout)?
                .into_iter()
                .map(|(serial, transport)| {
                    let backend = SrV4PowerBoardBackend::new(transport)?;
                    PowerBoard::new(serial, shared(backend))
                })
                .collect()
        }
    } else {
        fn discover_power_boards(_config: &HardwareConfig) -> Result<Vec<PowerBoard>> {
            Err(crate::error::Error::NotSupportedByHardware(
                "Built without the `usb` feature, power boards cannot be discovered".into(),
            ))
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serial")] {
        fn discover_motor_boards(config: &HardwareConfig) -> Result<Vec<MotorBoard>> {
            use crate::hw::sr_v4::motor_board::{PRODUCT_ID, VENDOR_ID};
            use crate::peripheral::serial::{find_usb_serial_ports, open_serial};
            use crate::sync::shared;

            find_usb_serial_ports(VENDOR_ID, PRODUCT_ID)?
                .into_iter()
                .map(|(path, serial)| {
                    let port = open_serial(&path, config.serial_baud_rate, config.serial_timeout)?;
                    let backend = SrV4MotorBoardBackend::new(port)?;
                    MotorBoard::new(serial, shared(backend))
                })
                .collect()
        }
    } else {
        fn discover_motor_boards(_config: &HardwareConfig) -> Result<Vec<MotorBoard>> {
            Err(crate::error::Error::NotSupportedByHardware(
                "Built without the `serial` feature, motor boards cannot be discovered".into(),
            ))
        }
    }
}
