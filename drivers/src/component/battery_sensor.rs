use super::{Component, Components};
use crate::error::Result;
use crate::hal::battery_sensor::BatterySensorInterface;
use crate::sync::Shared;

/// A sensor monitoring the robot's battery.
pub struct BatterySensor<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: BatterySensorInterface + ?Sized> BatterySensor<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    /// Battery voltage, in volts.
    pub fn voltage(&self) -> Result<f32> {
        self.backend
            .lock()
            .get_battery_sensor_voltage(self.identifier)
    }

    /// Current drawn from the battery, in amperes.
    pub fn current(&self) -> Result<f32> {
        self.backend
            .lock()
            .get_battery_sensor_current(self.identifier)
    }
}

impl<B: BatterySensorInterface + ?Sized> Component for BatterySensor<B> {
    const KIND: Components = Components::BATTERY_SENSOR;

    fn interface_name() -> &'static str {
        "BatterySensorInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}
