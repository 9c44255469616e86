//! Robot Hardware Driver Subsystem
//!
//! This crate provides a layered architecture for competition robot hardware:
//!
//! # Module Organization
//!
//! - [`hal`]: Component interfaces that backends implement
//! - [`component`]: Student-facing components built on those interfaces
//! - [`board`]: The [`Board`](board::Board) trait and [`BoardGroup`](board::BoardGroup)
//! - [`boards`]: Concrete boards (Student Robotics v4)
//! - [`platform`]: Environments and the backends they provide
//! - [`hw`]: Wire-level protocol definitions
//! - [`peripheral`]: Transports (USB control, serial, console)
//! - [`device_manager`]: Registry of live boards
//!
//! # Design Principles
//!
//! 1. **Separation of Concerns**: Boards describe layout, backends talk to hardware
//! 2. **Portability**: Student code only sees components and boards
//! 3. **Type Safety**: Invalid values are rejected before they reach a backend
//! 4. **Clear Ownership**: One backend per physical board, shared by its components
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::board::BoardGroup;
//! use drivers::boards::sr_v4::PowerBoard;
//! use drivers::platform::{HardwareConfig, hardware_environment};
//!
//! # fn main() -> drivers::Result<()> {
//! let env = hardware_environment(&HardwareConfig::default());
//! let power_boards = BoardGroup::<PowerBoard>::from_environment(&env)?;
//! power_boards.singular()?.outputs().power_on()?;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod boards;
pub mod component;
pub mod device_manager;
pub mod error;
pub mod hal;
pub mod hw;
pub mod peripheral;
pub mod platform;
pub mod sync;

// Re-export commonly used types
pub use board::{Board, BoardGroup};
pub use component::Components;
pub use error::{Error, Result};
pub use hal::gpio::GpioPinMode;
pub use hal::motor::MotorState;
pub use hal::piezo::{Note, Pitch};
pub use platform::{Backend, Environment};
