use super::{Component, Components};
use crate::error::Result;
use crate::hal::led::LedInterface;
use crate::sync::Shared;

/// A standard light emitting diode.
pub struct Led<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: LedInterface + ?Sized> Led<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    /// Whether the LED is lit.
    pub fn state(&self) -> Result<bool> {
        self.backend.lock().get_led_state(self.identifier)
    }

    pub fn set_state(&self, state: bool) -> Result<()> {
        self.backend.lock().set_led_state(self.identifier, state)
    }
}

impl<B: LedInterface + ?Sized> Component for Led<B> {
    const KIND: Components = Components::LED;

    fn interface_name() -> &'static str {
        "LedInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}
