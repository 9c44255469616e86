//! SR v4 motor board over a USB serial link.

use crate::error::{Error, Result};
use crate::hal::motor::{MotorInterface, MotorState};
use crate::hw::sr_v4::motor_board::{
    CMD_VERSION, FIRMWARE_VERSION, MOTOR_COUNT, motor_command, parse_version,
};
use crate::peripheral::serial::{SerialLink, read_line, write_all};
use crate::platform::Backend;

/// Drives one motor board.
///
/// The board does not report motor states, so the last written values are
/// cached here.
pub struct SrV4MotorBoardBackend<L> {
    link: L,
    firmware_version: String,
    states: [MotorState; MOTOR_COUNT],
}

impl<L: SerialLink> SrV4MotorBoardBackend<L> {
    /// Check the firmware version, then brake both motors.
    ///
    /// # Errors
    ///
    /// `Communication` if the board does not answer or runs unsupported
    /// firmware.
    pub fn new(mut link: L) -> Result<Self> {
        write_all(&mut link, &[CMD_VERSION])?;
        let reply = read_line(&mut link)?;
        let version = parse_version(&reply)?;
        if version != FIRMWARE_VERSION {
            return Err(Error::Communication(format!(
                "Unexpected firmware version: {version}, expected {FIRMWARE_VERSION}"
            )));
        }

        let mut backend = Self {
            firmware_version: version.to_owned(),
            link,
            states: [MotorState::Brake; MOTOR_COUNT],
        };
        for motor in 0..MOTOR_COUNT {
            backend.set_motor_state(motor, MotorState::Brake)?;
        }
        Ok(backend)
    }
}

impl<L: SerialLink> Backend for SrV4MotorBoardBackend<L> {
    fn firmware_version(&mut self) -> Result<Option<String>> {
        Ok(Some(self.firmware_version.clone()))
    }
}

impl<L: SerialLink> MotorInterface for SrV4MotorBoardBackend<L> {
    fn get_motor_state(&mut self, identifier: usize) -> Result<MotorState> {
        self.states.get(identifier).copied().ok_or_else(|| {
            Error::NotSupportedByHardware(format!(
                "Motor board has {MOTOR_COUNT} motors, there is no motor {identifier}"
            ))
        })
    }

    fn set_motor_state(&mut self, identifier: usize, state: MotorState) -> Result<()> {
        let command = motor_command(identifier, state)?;
        write_all(&mut self.link, &command)?;
        self.states[identifier] = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::sr_v4::motor_board::{CMD_MOTOR, SPEED_BRAKE, SPEED_COAST};
    use std::io::{self, Cursor, Read, Write};

    struct ScriptedLink {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl ScriptedLink {
        fn replying(reply: &str) -> Self {
            Self {
                input: Cursor::new(reply.as_bytes().to_vec()),
                output: Vec::new(),
            }
        }
    }

    impl Read for ScriptedLink {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for ScriptedLink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn open_checks_version_and_brakes() {
        let mut backend = SrV4MotorBoardBackend::new(ScriptedLink::replying("MCV4B:3\n")).unwrap();
        assert_eq!(
            backend.link.output,
            vec![CMD_VERSION, CMD_MOTOR[0], SPEED_BRAKE, CMD_MOTOR[1], SPEED_BRAKE]
        );
        assert_eq!(backend.firmware_version().unwrap().as_deref(), Some("3"));
        assert_eq!(backend.get_motor_state(1).unwrap(), MotorState::Brake);
    }

    #[test]
    fn open_rejects_other_firmware() {
        assert!(matches!(
            SrV4MotorBoardBackend::new(ScriptedLink::replying("MCV4B:2\n")),
            Err(Error::Communication(_))
        ));
        assert!(SrV4MotorBoardBackend::new(ScriptedLink::replying("")).is_err());
    }

    #[test]
    fn set_state_writes_and_caches() {
        let mut backend = SrV4MotorBoardBackend::new(ScriptedLink::replying("MCV4B:3\n")).unwrap();
        backend.link.output.clear();

        backend.set_motor_state(0, MotorState::Speed(1.0)).unwrap();
        backend.set_motor_state(1, MotorState::Coast).unwrap();
        assert_eq!(
            backend.link.output,
            vec![CMD_MOTOR[0], 253, CMD_MOTOR[1], SPEED_COAST]
        );
        assert_eq!(backend.get_motor_state(0).unwrap(), MotorState::Speed(1.0));
        assert!(backend.get_motor_state(2).is_err());
    }

    #[test]
    fn invalid_speed_leaves_cache_alone() {
        let mut backend = SrV4MotorBoardBackend::new(ScriptedLink::replying("MCV4B:3\n")).unwrap();
        assert!(backend.set_motor_state(0, MotorState::Speed(2.0)).is_err());
        assert_eq!(backend.get_motor_state(0).unwrap(), MotorState::Brake);
    }
}
