//! GPIO (General Purpose Input/Output) interface.

use crate::error::Result;
use core::fmt;

/// Hardware modes that a GPIO pin can be set to.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GpioPinMode {
    /// The digital state of the pin can be read.
    DigitalInput = 0,
    /// Same as `DigitalInput` but the internal pull-up is enabled.
    DigitalInputPullup = 1,
    /// Same as `DigitalInput` but the internal pull-down is enabled.
    DigitalInputPulldown = 2,
    /// The digital state of the pin can be set.
    DigitalOutput = 3,
    /// The analogue voltage of the pin can be read.
    AnalogueInput = 4,
    /// The analogue voltage of the pin can be set using a DAC.
    AnalogueOutput = 5,
    /// A PWM output signal can be created on the pin.
    PwmOutput = 6,
}

impl GpioPinMode {
    /// Every digital mode.
    pub const DIGITAL: [GpioPinMode; 4] = [
        GpioPinMode::DigitalOutput,
        GpioPinMode::DigitalInput,
        GpioPinMode::DigitalInputPullup,
        GpioPinMode::DigitalInputPulldown,
    ];
}

impl fmt::Display for GpioPinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GpioPinMode::DigitalInput => "DIGITAL_INPUT",
            GpioPinMode::DigitalInputPullup => "DIGITAL_INPUT_PULLUP",
            GpioPinMode::DigitalInputPulldown => "DIGITAL_INPUT_PULLDOWN",
            GpioPinMode::DigitalOutput => "DIGITAL_OUTPUT",
            GpioPinMode::AnalogueInput => "ANALOGUE_INPUT",
            GpioPinMode::AnalogueOutput => "ANALOGUE_OUTPUT",
            GpioPinMode::PwmOutput => "PWM_OUTPUT",
        };
        f.write_str(name)
    }
}

/// GPIO pin interface.
///
/// Analogue values are scaled: `0.0` is ground and `1.0` is the pin's
/// reference voltage. PWM duty cycles use the same range.
pub trait GpioPinInterface {
    /// Set the hardware mode of a pin.
    fn set_gpio_pin_mode(&mut self, identifier: usize, mode: GpioPinMode) -> Result<()>;

    /// Get the hardware mode of a pin.
    fn get_gpio_pin_mode(&mut self, identifier: usize) -> Result<GpioPinMode>;

    /// Drive a digital output.
    fn write_gpio_pin_digital_state(&mut self, identifier: usize, state: bool) -> Result<()>;

    /// Get the last written state of a digital output.
    fn get_gpio_pin_digital_state(&mut self, identifier: usize) -> Result<bool>;

    /// Read the digital state of an input pin.
    fn read_gpio_pin_digital_state(&mut self, identifier: usize) -> Result<bool>;

    /// Read the scaled analogue value of a pin.
    fn read_gpio_pin_analogue_value(&mut self, identifier: usize) -> Result<f32>;

    /// Write a scaled value to the DAC on a pin.
    fn write_gpio_pin_dac_value(&mut self, identifier: usize, scaled_value: f32) -> Result<()>;

    /// Write a duty cycle to the PWM on a pin.
    fn write_gpio_pin_pwm_value(&mut self, identifier: usize, duty_cycle: f32) -> Result<()>;
}
