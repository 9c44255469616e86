//! Boards and groups of boards.

use crate::component::Components;
use crate::error::{Error, Result};
use crate::platform::Environment;
use std::collections::BTreeMap;
use std::ops::Index;

/// A piece of hardware carrying components, identified by its serial number.
pub trait Board: Send + Sync {
    /// Human friendly name of this type of board.
    fn board_name() -> &'static str
    where
        Self: Sized;

    /// Component kinds this type of board carries.
    fn supported_components() -> Components
    where
        Self: Sized;

    /// Human friendly name of this board.
    fn name(&self) -> &'static str;

    /// Serial number of this board.
    fn serial(&self) -> &str;

    /// Firmware version reported by the board, if it reports one.
    fn firmware_version(&self) -> Result<Option<String>>;

    /// Put the board in a state where it cannot move or power anything.
    fn make_safe(&self) -> Result<()>;
}

/// A collection of boards of one type, ordered by serial number.
pub struct BoardGroup<B> {
    boards: BTreeMap<String, B>,
}

impl<B: Board> BoardGroup<B> {
    pub fn new(boards: impl IntoIterator<Item = B>) -> Self {
        Self {
            boards: boards
                .into_iter()
                .map(|board| (board.serial().to_owned(), board))
                .collect(),
        }
    }

    /// Discover every board of this type in an environment.
    pub fn from_environment(environment: &Environment) -> Result<Self>
    where
        B: 'static,
    {
        let boards = environment.discover::<B>()?;
        log::info!(
            "Found {} {}(s) in {}",
            boards.len(),
            B::board_name(),
            environment.name()
        );
        Ok(Self::new(boards))
    }

    /// The only board in the group.
    ///
    /// # Errors
    ///
    /// `NotSingular` unless the group holds exactly one board.
    pub fn singular(&self) -> Result<&B> {
        let mut boards = self.boards.values();
        match (boards.next(), boards.next()) {
            (Some(board), None) => Ok(board),
            _ => Err(Error::NotSingular {
                board: B::board_name(),
                found: self.boards.len(),
            }),
        }
    }

    pub fn get(&self, serial: &str) -> Option<&B> {
        self.boards.get(serial)
    }

    /// Look up a board, failing with `BoardNotFound`.
    pub fn by_serial(&self, serial: &str) -> Result<&B> {
        self.get(serial).ok_or_else(|| Error::BoardNotFound {
            board: B::board_name(),
            serial: serial.to_owned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.boards.values()
    }

    pub fn serials(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Make every board in the group safe.
    ///
    /// Every board is attempted even if one fails; the first error is returned.
    pub fn make_safe(&self) -> Result<()> {
        let mut result = Ok(());
        for board in self.boards.values() {
            log::debug!("Making {} {} safe", board.name(), board.serial());
            if let Err(e) = board.make_safe() {
                log::error!("Failed to make {} {} safe: {}", board.name(), board.serial(), e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

impl<B: Board> Index<&str> for BoardGroup<B> {
    type Output = B;

    fn index(&self, serial: &str) -> &Self::Output {
        self.get(serial)
            .unwrap_or_else(|| panic!("no {} with serial {}", B::board_name(), serial))
    }
}

/// Boards by position in serial number order.
impl<B: Board> Index<usize> for BoardGroup<B> {
    type Output = B;

    fn index(&self, index: usize) -> &Self::Output {
        self.boards.values().nth(index).unwrap_or_else(|| {
            panic!(
                "index {} out of range for {} {}(s)",
                index,
                self.boards.len(),
                B::board_name()
            )
        })
    }
}

impl<'a, B: Board> IntoIterator for &'a BoardGroup<B> {
    type Item = &'a B;
    type IntoIter = std::collections::btree_map::Values<'a, String, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.values()
    }
}
