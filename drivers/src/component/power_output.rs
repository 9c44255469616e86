//! Toggleable power output channels.

use super::{Component, Components};
use crate::error::Result;
use crate::hal::power_output::PowerOutputInterface;
use crate::sync::Shared;
use std::collections::BTreeMap;
use std::ops::Index;

/// A power output channel.
///
/// It can be enabled and disabled, and the current drawn on it measured.
pub struct PowerOutput<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: PowerOutputInterface + ?Sized> PowerOutput<B> {
    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.backend
            .lock()
            .get_power_output_enabled(self.identifier)
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.backend
            .lock()
            .set_power_output_enabled(self.identifier, enabled)
    }

    /// Current drawn on this output, in amperes.
    pub fn current(&self) -> Result<f32> {
        self.backend
            .lock()
            .get_power_output_current(self.identifier)
    }
}

impl<B: PowerOutputInterface + ?Sized> Component for PowerOutput<B> {
    const KIND: Components = Components::POWER_OUTPUT;

    fn interface_name() -> &'static str {
        "PowerOutputInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}

/// A group of power outputs, keyed and ordered by `K`.
pub struct PowerOutputGroup<K, B: ?Sized> {
    outputs: BTreeMap<K, PowerOutput<B>>,
}

impl<K: Ord, B: PowerOutputInterface + ?Sized> PowerOutputGroup<K, B> {
    pub fn new(outputs: impl IntoIterator<Item = (K, PowerOutput<B>)>) -> Self {
        Self {
            outputs: outputs.into_iter().collect(),
        }
    }

    /// Enable every output in the group.
    pub fn power_on(&self) -> Result<()> {
        self.outputs
            .values()
            .try_for_each(|output| output.set_enabled(true))
    }

    /// Disable every output in the group.
    ///
    /// All outputs are attempted even if one fails; the first error is returned.
    pub fn power_off(&self) -> Result<()> {
        let mut result = Ok(());
        for output in self.outputs.values() {
            if let Err(e) = output.set_enabled(false) {
                log::warn!("Failed to disable power output {}: {}", output.identifier, e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    pub fn get(&self, key: &K) -> Option<&PowerOutput<B>> {
        self.outputs.get(key)
    }

    /// Iterate over the outputs in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PowerOutput<B>> {
        self.outputs.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.outputs.keys()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl<K: Ord, B: PowerOutputInterface + ?Sized> Index<K> for PowerOutputGroup<K, B> {
    type Output = PowerOutput<B>;

    fn index(&self, key: K) -> &Self::Output {
        &self.outputs[&key]
    }
}

impl<'a, K: Ord, B: PowerOutputInterface + ?Sized> IntoIterator for &'a PowerOutputGroup<K, B> {
    type Item = &'a PowerOutput<B>;
    type IntoIter = std::collections::btree_map::Values<'a, K, PowerOutput<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outputs.values()
    }
}
