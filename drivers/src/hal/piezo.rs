//! Piezo sounder interface.

use crate::error::Result;
use core::fmt;
use std::time::Duration;

/// Musical notes in the sixth octave, a comfortable range for small sounders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Note {
    C6,
    D6,
    E6,
    F6,
    G6,
    A6,
    B6,
    C7,
}

impl Note {
    /// Frequency of the note in hertz.
    pub fn frequency(self) -> f32 {
        match self {
            Note::C6 => 1046.5,
            Note::D6 => 1174.7,
            Note::E6 => 1318.5,
            Note::F6 => 1396.9,
            Note::G6 => 1568.0,
            Note::A6 => 1760.0,
            Note::B6 => 1975.5,
            Note::C7 => 2093.0,
        }
    }
}

/// A pitch in hertz.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Pitch(pub f32);

impl Pitch {
    /// Frequency in hertz.
    pub fn hz(self) -> f32 {
        self.0
    }
}

impl From<Note> for Pitch {
    fn from(note: Note) -> Self {
        Pitch(note.frequency())
    }
}

impl From<f32> for Pitch {
    fn from(hz: f32) -> Self {
        Pitch(hz)
    }
}

impl From<u16> for Pitch {
    fn from(hz: u16) -> Self {
        Pitch(hz as f32)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.0)
    }
}

/// Piezo sounder interface.
pub trait PiezoInterface {
    /// Sound the piezo at `pitch` for `duration`.
    fn buzz(&mut self, identifier: usize, duration: Duration, pitch: Pitch) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Note::C6, "1046.5Hz")]
    #[case(Note::B6, "1975.5Hz")]
    #[case(Note::C7, "2093Hz")]
    fn notes_to_pitch(#[case] note: Note, #[case] expected: &str) {
        assert_eq!(Pitch::from(note).to_string(), expected);
    }
}
