//! Student Robotics v4 boards.

mod motor_board;
mod power_board;

pub use motor_board::{MotorBoard, MotorBoardBackend};
pub use power_board::{PowerBoard, PowerBoardBackend, PowerOutputPosition};
