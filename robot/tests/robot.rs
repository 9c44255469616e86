use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use robot::Robot;
use robot::config::{EnvironmentKind, RobotConfig};
use robot::drivers::boards::sr_v4::PowerOutputPosition;
use robot::drivers::device_manager;
use robot::drivers::peripheral::console::Console;
use robot::drivers::platform::{ConsoleConfig, console_environment_with};
use robot::drivers::{Board, Environment, Error, MotorState};

#[derive(Clone, Default)]
struct Transcript(Arc<Mutex<Vec<u8>>>);

impl Transcript {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn console(input: &str, power: &str, motors: &[&str]) -> (Environment, Transcript) {
    let transcript = Transcript::default();
    let console = Console::new(Cursor::new(input.to_owned()), transcript.clone()).unwrap();
    let config = ConsoleConfig {
        power_board_serial: power.into(),
        motor_board_serials: motors.iter().map(|s| s.to_string()).collect(),
    };
    (console_environment_with(Arc::new(console), &config), transcript)
}

#[test]
fn robot_powers_on_outputs() {
    let (env, transcript) = console("", "R-POWER", &["R-POWER-MB"]);
    let robot = Robot::new(env).unwrap();

    assert_eq!(robot.environment().name(), "ConsoleEnvironment");
    for position in PowerOutputPosition::ALL {
        assert!(robot.power_board().outputs()[position].is_enabled().unwrap());
    }
    assert!(transcript.text().contains("Power Board v4 - R-POWER: Setting output 5 to true"));
}

#[test]
fn readme_sketch() {
    let (env, transcript) = console("", "R-README", &["R-README-MB"]);
    let r = Robot::new(env).unwrap();
    r.power_board().outputs().power_on().unwrap();
    r.motor_boards()[0].motors()[1].set_power(0.5).unwrap();

    assert_eq!(
        r.motor_board().unwrap().motors()[1].state().unwrap(),
        MotorState::Speed(0.5)
    );
    assert!(transcript.text().contains("Motor Board v4 - R-README-MB: Setting motor 1 to 0.5"));
}

#[test]
fn wait_start_returns_once_pressed() {
    let (env, transcript) = console("\n", "R-START", &[]);
    let robot = Robot::new(env).unwrap();
    robot.wait_start().unwrap();

    let text = transcript.text();
    assert_eq!(text.matches("Hit return to press the start button").count(), 1);
}

#[test]
fn dropping_robot_makes_safe_and_releases_boards() {
    let (env, transcript) = console("", "R-DROP", &["R-DROP-MB"]);
    let robot = Robot::new(env).unwrap();
    drop(robot);

    let text = transcript.text();
    assert!(text.contains("Motor Board v4 - R-DROP-MB: Setting motor 0 to BRAKE"));
    assert!(text.contains("Power Board v4 - R-DROP: Setting output 0 to false"));
    assert!(
        !device_manager::claimed()
            .iter()
            .any(|(_, serial)| serial.starts_with("R-DROP"))
    );
}

#[test]
fn motor_board_requires_exactly_one() {
    let (env, _) = console("", "R-MANY", &["R-MANY-0", "R-MANY-1"]);
    let robot = Robot::new(env).unwrap();
    assert!(matches!(
        robot.motor_board(),
        Err(Error::NotSingular { found: 2, .. })
    ));
}

#[test]
fn missing_power_board_backend() {
    let env = Environment::new("Empty");
    assert!(matches!(Robot::new(env), Err(Error::NoBackend { .. })));
}

#[test]
fn from_config_builds_a_console_robot() {
    let config = RobotConfig {
        environment: EnvironmentKind::Console,
        console: ConsoleConfig {
            power_board_serial: "R-CONFIG".into(),
            motor_board_serials: vec!["R-CONFIG-MB".into()],
        },
        ..RobotConfig::default()
    };
    let robot = Robot::from_config(&config).unwrap();

    assert_eq!(robot.environment().name(), "ConsoleEnvironment");
    assert_eq!(robot.power_board().serial(), "R-CONFIG");
    assert_eq!(robot.motor_board().unwrap().serial(), "R-CONFIG-MB");
}

#[test]
fn from_config_searches_hardware() {
    // No boards are attached, so discovery finds none or fails to search.
    let Err(error) = Robot::from_config(&RobotConfig::default()) else {
        panic!("found robot boards");
    };
    assert!(!matches!(error, Error::NoBackend { .. }), "{error}");
    #[cfg(feature = "usb")]
    assert!(!matches!(error, Error::NotSupportedByHardware(_)), "{error}");
}
