//! Transports
//!
//! Byte-level links between a backend and the board it drives.
//!
//! # Available Transports
//!
//! - [`control`]: USB vendor control requests
//! - [`serial`]: Line-oriented serial links
//! - [`console`]: A human at a text console, standing in for hardware

pub mod console;
pub mod control;
pub mod serial;
