pub mod motor_board;
pub mod power_board;
