use drivers::board::{Board, BoardGroup};
use drivers::boards::sr_v4::MotorBoard;
use drivers::component::Components;
use drivers::hal::motor::MotorInterface;
use drivers::sync::{Shared, shared};
use drivers::{Backend, Error, MotorState, Result};
use rstest::rstest;

struct MockMotorBoardBackend {
    states: [MotorState; 2],
    writes: usize,
}

impl Default for MockMotorBoardBackend {
    fn default() -> Self {
        Self {
            states: [MotorState::Coast; 2],
            writes: 0,
        }
    }
}

impl Backend for MockMotorBoardBackend {
    fn firmware_version(&mut self) -> Result<Option<String>> {
        Ok(Some("3".into()))
    }
}

impl MotorInterface for MockMotorBoardBackend {
    fn get_motor_state(&mut self, identifier: usize) -> Result<MotorState> {
        Ok(self.states[identifier])
    }

    fn set_motor_state(&mut self, identifier: usize, state: MotorState) -> Result<()> {
        self.states[identifier] = state;
        self.writes += 1;
        Ok(())
    }
}

fn board(serial: &str) -> (MotorBoard, Shared<MockMotorBoardBackend>) {
    let backend = shared(MockMotorBoardBackend::default());
    let board = MotorBoard::new(serial, backend.clone()).unwrap();
    (board, backend)
}

#[test]
fn motor_board_identity() {
    let (board, _) = board("MB-IDENTITY");
    assert_eq!(board.name(), "Student Robotics v4 Motor Board");
    assert_eq!(board.firmware_version().unwrap().as_deref(), Some("3"));
    assert_eq!(MotorBoard::supported_components(), Components::MOTOR);
    assert_eq!(board.motors().len(), 2);
}

#[rstest]
#[case(0, 0.5)]
#[case(1, -1.0)]
#[case(1, 0.0)]
fn motors_drive_their_own_output(#[case] motor: usize, #[case] speed: f32) {
    let (board, backend) = board(&format!("MB-DRIVE-{motor}-{speed}"));
    board.motors()[motor].set_power(speed).unwrap();

    assert_eq!(backend.lock().states[motor], MotorState::Speed(speed));
    assert_eq!(backend.lock().states[1 - motor], MotorState::Coast);
    assert_eq!(board.motors()[motor].state().unwrap(), MotorState::Speed(speed));
}

#[rstest]
#[case(1.5)]
#[case(-1.01)]
#[case(f32::INFINITY)]
fn out_of_range_power_never_reaches_backend(#[case] speed: f32) {
    let (board, backend) = board(&format!("MB-RANGE-{speed}"));
    assert!(matches!(
        board.motors()[0].set_power(speed),
        Err(Error::InvalidValue(_))
    ));
    assert_eq!(backend.lock().writes, 0);
}

#[test]
fn make_safe_brakes_both_motors() {
    let (board, backend) = board("MB-SAFE");
    board.motors()[0].set_power(1.0).unwrap();
    board.make_safe().unwrap();
    assert_eq!(backend.lock().states, [MotorState::Brake; 2]);
}

#[test]
fn group_make_safe_covers_every_board() {
    let (first, first_backend) = board("MB-GROUP-0");
    let (second, second_backend) = board("MB-GROUP-1");
    let group = BoardGroup::new([second, first]);

    assert_eq!(group[0].serial(), "MB-GROUP-0");
    assert_eq!(group["MB-GROUP-1"].serial(), "MB-GROUP-1");
    group.make_safe().unwrap();
    assert_eq!(first_backend.lock().states, [MotorState::Brake; 2]);
    assert_eq!(second_backend.lock().states, [MotorState::Brake; 2]);
}
