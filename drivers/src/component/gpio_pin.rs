//! GPIO pins.

use super::{Component, Components};
use crate::error::{Error, Result};
use crate::hal::gpio::{GpioPinInterface, GpioPinMode};
use crate::sync::Shared;

/// A general purpose pin.
///
/// The pin only allows modes listed at construction, and each operation
/// checks that the pin is currently in a mode that allows it.
pub struct GpioPin<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
    supported_modes: Vec<GpioPinMode>,
}

impl<B: GpioPinInterface + ?Sized> GpioPin<B> {
    /// Modes a pin supports when none are given.
    pub const DEFAULT_SUPPORTED_MODES: &'static [GpioPinMode] = &[GpioPinMode::DigitalOutput];

    /// Create a pin and put it in its initial mode.
    ///
    /// Without an explicit `initial_mode` the first supported mode is used.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if `supported_modes` is empty
    /// - `NotSupportedByHardware` if `initial_mode` is not supported
    pub fn new(
        identifier: usize,
        backend: Shared<B>,
        supported_modes: &[GpioPinMode],
        initial_mode: Option<GpioPinMode>,
    ) -> Result<Self> {
        let Some(&first) = supported_modes.first() else {
            return Err(Error::InvalidValue(
                "A GPIO pin must support at least one GpioPinMode".into(),
            ));
        };

        let pin = Self {
            identifier,
            backend,
            supported_modes: supported_modes.to_vec(),
        };
        pin.set_mode(initial_mode.unwrap_or(first))?;
        Ok(pin)
    }

    /// Create a pin that only supports digital output.
    pub fn digital_output(identifier: usize, backend: Shared<B>) -> Result<Self> {
        Self::new(identifier, backend, Self::DEFAULT_SUPPORTED_MODES, None)
    }

    /// Modes this pin may be put in.
    pub fn supported_modes(&self) -> &[GpioPinMode] {
        &self.supported_modes
    }

    /// Get the hardware mode of this pin.
    pub fn mode(&self) -> Result<GpioPinMode> {
        self.backend.lock().get_gpio_pin_mode(self.identifier)
    }

    /// Set the hardware mode of this pin.
    pub fn set_mode(&self, mode: GpioPinMode) -> Result<()> {
        if !self.supported_modes.contains(&mode) {
            return Err(Error::NotSupportedByHardware(format!(
                "Pin {} does not support {mode}",
                self.identifier
            )));
        }
        self.backend.lock().set_gpio_pin_mode(self.identifier, mode)
    }

    /// Ensure the pin is in one of `modes`. An empty list allows any mode.
    pub fn require_pin_modes(&self, modes: &[GpioPinMode]) -> Result<()> {
        if modes.is_empty() {
            return Ok(());
        }
        let mode = self.mode()?;
        if modes.contains(&mode) {
            Ok(())
        } else {
            Err(Error::BadGpioPinMode {
                pin: self.identifier,
                required: modes.to_vec(),
            })
        }
    }

    /// Get the digital state of the pin.
    ///
    /// In `DigitalOutput` this is the last written state; in the input
    /// modes it is read from the pin.
    pub fn digital_state(&self) -> Result<bool> {
        self.require_pin_modes(&GpioPinMode::DIGITAL)?;

        let mut backend = self.backend.lock();
        if backend.get_gpio_pin_mode(self.identifier)? == GpioPinMode::DigitalOutput {
            backend.get_gpio_pin_digital_state(self.identifier)
        } else {
            backend.read_gpio_pin_digital_state(self.identifier)
        }
    }

    /// Drive the pin high or low.
    pub fn set_digital_state(&self, state: bool) -> Result<()> {
        self.require_pin_modes(&[GpioPinMode::DigitalOutput])?;
        self.backend
            .lock()
            .write_gpio_pin_digital_state(self.identifier, state)
    }

    /// Get the scaled analogue reading of the pin.
    pub fn analogue_value(&self) -> Result<f32> {
        self.require_pin_modes(&[GpioPinMode::AnalogueInput])?;
        self.backend
            .lock()
            .read_gpio_pin_analogue_value(self.identifier)
    }

    /// Set the scaled analogue output of the pin, through its DAC or PWM.
    pub fn set_analogue_value(&self, value: f32) -> Result<()> {
        self.require_pin_modes(&[GpioPinMode::AnalogueOutput, GpioPinMode::PwmOutput])?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidValue(format!(
                "An analogue pin value must be between 0 and 1, got {value}"
            )));
        }

        let mut backend = self.backend.lock();
        match backend.get_gpio_pin_mode(self.identifier)? {
            GpioPinMode::AnalogueOutput => {
                backend.write_gpio_pin_dac_value(self.identifier, value)
            }
            _ => backend.write_gpio_pin_pwm_value(self.identifier, value),
        }
    }
}

impl<B: GpioPinInterface + ?Sized> Component for GpioPin<B> {
    const KIND: Components = Components::GPIO_PIN;

    fn interface_name() -> &'static str {
        "GpioPinInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}
