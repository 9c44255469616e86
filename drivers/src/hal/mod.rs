//! Hardware Abstraction Layer (HAL) - Component Interfaces
//!
//! This module defines one trait per kind of component. Backends implement
//! the traits for the components their board carries, and the wrappers in
//! [`crate::component`] call through them.
//!
//! # Design Principles
//!
//! - **One backend per board**: methods address a component by identifier only
//! - **Units at the boundary**: amperes, volts, hertz and fractions of full scale
//! - **No validation here**: range checks live in the components
//!
//! # Available Interfaces
//!
//! - [`gpio`]: General purpose pins (digital, analogue, PWM)
//! - [`led`]: Indicator LEDs
//! - [`button`]: Push buttons
//! - [`power_output`]: Switchable power channels
//! - [`battery_sensor`]: Battery voltage and current monitoring
//! - [`motor`]: DC motor outputs
//! - [`servo`]: Servo motors
//! - [`piezo`]: Piezo sounders

pub mod battery_sensor;
pub mod button;
pub mod gpio;
pub mod led;
pub mod motor;
pub mod piezo;
pub mod power_output;
pub mod servo;
