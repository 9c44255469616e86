use robot::drivers::Result;
use robot::{Robot, RobotConfig};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RobotConfig::from_env()?;
    let robot = Robot::from_config(&config)?;

    log::info!(
        "Battery at {:.2}V",
        robot.power_board().battery_sensor().voltage()?
    );
    robot.wait_start()?;

    for board in robot.motor_boards() {
        for motor in board.motors() {
            motor.set_power(0.5)?;
        }
    }
    thread::sleep(Duration::from_secs(2));

    robot.make_safe()
}
