//! Components - the smallest logical elements of hardware.
//!
//! A component owns an identifier and a shared handle to the backend of the
//! board it lives on. Range checks happen here, before anything reaches a
//! backend.

mod battery_sensor;
mod button;
mod gpio_pin;
mod led;
mod motor;
mod piezo;
mod power_output;
mod servo;

pub use battery_sensor::BatterySensor;
pub use button::Button;
pub use gpio_pin::GpioPin;
pub use led::Led;
pub use motor::Motor;
pub use piezo::Piezo;
pub use power_output::{PowerOutput, PowerOutputGroup};
pub use servo::Servo;

bitflags::bitflags! {
    /// Set of component kinds, used to describe what a board carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Components: u16 {
        const GPIO_PIN = 1 << 0;
        const LED = 1 << 1;
        const BUTTON = 1 << 2;
        const POWER_OUTPUT = 1 << 3;
        const BATTERY_SENSOR = 1 << 4;
        const MOTOR = 1 << 5;
        const SERVO = 1 << 6;
        const PIEZO = 1 << 7;
    }
}

/// Common behaviour of every component.
pub trait Component {
    /// The kind of this component.
    const KIND: Components;

    /// Name of the interface a backend must implement to drive this component.
    fn interface_name() -> &'static str;

    /// Identifier of this component on its board.
    fn identifier(&self) -> usize;
}
