//! Registry of live boards.
//!
//! Two board objects driving the same physical board would fight over its
//! outputs, so each board claims its `(name, serial)` entry on construction
//! and releases it when dropped.

use crate::error::{Error, Result};
use crate::sync::SpinLock;
use std::collections::BTreeSet;

pub struct DeviceManager {
    boards: BTreeSet<(&'static str, String)>,
}

impl DeviceManager {
    pub const fn new() -> Self {
        Self {
            boards: BTreeSet::new(),
        }
    }

    /// Record a board as live. Returns false if it already was.
    pub fn register(&mut self, board: &'static str, serial: &str) -> bool {
        self.boards.insert((board, serial.to_owned()))
    }

    pub fn unregister(&mut self, board: &'static str, serial: &str) {
        self.boards.remove(&(board, serial.to_owned()));
    }

    pub fn contains(&self, board: &'static str, serial: &str) -> bool {
        self.boards.contains(&(board, serial.to_owned()))
    }

    pub fn list(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.boards
            .iter()
            .map(|(board, serial)| (*board, serial.as_str()))
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new()
    }
}

static DEVICE_MANAGER: SpinLock<DeviceManager> = SpinLock::new(DeviceManager::new());

pub fn devices() -> &'static SpinLock<DeviceManager> {
    &DEVICE_MANAGER
}

/// Every live board, as `(name, serial)` pairs.
pub fn claimed() -> Vec<(&'static str, String)> {
    devices()
        .lock()
        .list()
        .map(|(board, serial)| (board, serial.to_owned()))
        .collect()
}

/// Exclusive claim on a physical board, released on drop.
#[derive(Debug)]
pub struct BoardClaim {
    board: &'static str,
    serial: String,
}

impl BoardClaim {
    /// # Errors
    ///
    /// `BoardInUse` if another live object already drives this board.
    pub fn acquire(board: &'static str, serial: &str) -> Result<Self> {
        if !devices().lock().register(board, serial) {
            return Err(Error::BoardInUse {
                board,
                serial: serial.to_owned(),
            });
        }
        log::debug!("Claimed {} {}", board, serial);
        Ok(Self {
            board,
            serial: serial.to_owned(),
        })
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }
}

impl Drop for BoardClaim {
    fn drop(&mut self) {
        devices().lock().unregister(self.board, &self.serial);
        log::debug!("Released {} {}", self.board, self.serial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_fails_until_first_is_dropped() {
        let first = BoardClaim::acquire("Claim Test Board", "CLAIM0").unwrap();
        assert!(devices().lock().contains("Claim Test Board", "CLAIM0"));

        assert!(matches!(
            BoardClaim::acquire("Claim Test Board", "CLAIM0"),
            Err(Error::BoardInUse { .. })
        ));

        drop(first);
        assert!(!devices().lock().contains("Claim Test Board", "CLAIM0"));
        let again = BoardClaim::acquire("Claim Test Board", "CLAIM0").unwrap();
        assert_eq!(again.serial(), "CLAIM0");
    }

    #[test]
    fn same_serial_on_different_board_types() {
        let _a = BoardClaim::acquire("Claim Test Board A", "CLAIM1").unwrap();
        let _b = BoardClaim::acquire("Claim Test Board B", "CLAIM1").unwrap();

        let claimed = claimed();
        assert!(claimed.contains(&("Claim Test Board A", "CLAIM1".to_owned())));
        assert!(claimed.contains(&("Claim Test Board B", "CLAIM1".to_owned())));
    }
}
