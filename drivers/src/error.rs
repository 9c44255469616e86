//! Error types for the driver subsystem

use crate::hal::gpio::GpioPinMode;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Driver error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hardware cannot do what was asked of it
    #[error("Not supported by hardware: {0}")]
    NotSupportedByHardware(String),

    /// A GPIO pin is not in a mode that allows the operation
    #[error("Pin {pin} needs to be in one of {required:?}")]
    BadGpioPinMode {
        /// Pin identifier
        pin: usize,
        /// Modes that would have allowed the operation
        required: Vec<GpioPinMode>,
    },

    /// Argument out of range
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Unexpected reply from a board or console
    #[error("Communication error: {0}")]
    Communication(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port error
    #[cfg(feature = "serial")]
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// USB error
    #[cfg(feature = "usb")]
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    /// The environment cannot provide this kind of board
    #[error("Environment {environment} has no backend for {board}")]
    NoBackend {
        /// Board type name
        board: &'static str,
        /// Environment name
        environment: String,
    },

    /// A group was expected to hold exactly one board
    #[error("Expected exactly one {board} to be connected, but found {found}")]
    NotSingular {
        /// Board name
        board: &'static str,
        /// Number of boards in the group
        found: usize,
    },

    /// No board with the requested serial number
    #[error("No {board} with serial number {serial}")]
    BoardNotFound {
        /// Board name
        board: &'static str,
        /// Requested serial number
        serial: String,
    },

    /// The physical board already has a live instance
    #[error("{board} {serial} is already in use")]
    BoardInUse {
        /// Board name
        board: &'static str,
        /// Serial number
        serial: String,
    },
}
