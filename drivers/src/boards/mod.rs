//! Concrete boards.
//!
//! - [`sr_v4`]: Student Robotics v4 kit

pub mod sr_v4;
