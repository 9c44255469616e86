use super::{Component, Components};
use crate::error::{Error, Result};
use crate::hal::piezo::{PiezoInterface, Pitch};
use crate::sync::Shared;
use std::time::Duration;

/// A piezo sounder.
pub struct Piezo<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: PiezoInterface + ?Sized> Piezo<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    /// Sound the piezo. `pitch` may be a [`Note`](crate::Note) or a frequency in hertz.
    pub fn buzz(&self, duration: Duration, pitch: impl Into<Pitch>) -> Result<()> {
        let pitch = pitch.into();
        if !pitch.hz().is_finite() || pitch.hz() <= 0.0 {
            return Err(Error::InvalidValue(format!(
                "Frequency must be greater than zero, got {}",
                pitch.hz()
            )));
        }
        self.backend.lock().buzz(self.identifier, duration, pitch)
    }
}

impl<B: PiezoInterface + ?Sized> Component for Piezo<B> {
    const KIND: Components = Components::PIEZO;

    fn interface_name() -> &'static str {
        "PiezoInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::piezo::Note;
    use crate::sync::shared;

    #[derive(Default)]
    struct MockPiezoDriver {
        last: Option<(Duration, Pitch)>,
    }

    impl PiezoInterface for MockPiezoDriver {
        fn buzz(&mut self, _identifier: usize, duration: Duration, pitch: Pitch) -> Result<()> {
            self.last = Some((duration, pitch));
            Ok(())
        }
    }

    #[test]
    fn buzz_accepts_notes_and_frequencies() {
        let driver = shared(MockPiezoDriver::default());
        let piezo = Piezo::new(0, driver.clone());

        piezo.buzz(Duration::from_millis(250), Note::A6).unwrap();
        assert_eq!(
            driver.lock().last,
            Some((Duration::from_millis(250), Pitch(1760.0)))
        );

        piezo.buzz(Duration::from_secs(1), 440.0_f32).unwrap();
        assert_eq!(driver.lock().last, Some((Duration::from_secs(1), Pitch(440.0))));
    }

    #[test]
    fn buzz_rejects_non_positive_pitch() {
        let piezo = Piezo::new(0, shared(MockPiezoDriver::default()));

        assert!(matches!(
            piezo.buzz(Duration::from_secs(1), 0.0_f32),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            piezo.buzz(Duration::from_secs(1), -20.0_f32),
            Err(Error::InvalidValue(_))
        ));
    }
}
