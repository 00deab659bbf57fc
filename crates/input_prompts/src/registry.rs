//! Device prompt registry: device identity string → prompt dataset.

use crate::dataset::DeviceDataset;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::warn;

/// Lookup table from device names to the dataset registered for them.
///
/// A dataset listing several names is shared by all of them. Each name may be
/// registered once; later registrations of the same name are dropped with a
/// warning.
#[derive(Clone, Debug, Default)]
pub struct DevicePromptRegistry {
    devices: IndexMap<String, Arc<DeviceDataset>>,
}

impl DevicePromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from datasets in configuration order.
    pub fn build(datasets: impl IntoIterator<Item = DeviceDataset>) -> Self {
        let mut registry = Self::new();
        for dataset in datasets {
            registry.register(dataset);
        }
        registry
    }

    /// Register a dataset under each of its device names.
    ///
    /// Returns the names that were rejected because they were already taken.
    pub fn register(&mut self, dataset: DeviceDataset) -> Vec<String> {
        let dataset = Arc::new(dataset);
        let mut rejected = Vec::new();
        for name in &dataset.device_names {
            if let Some(existing) = self.devices.get(name) {
                warn!(
                    "Duplicate device name '{}' in dataset '{}', keeping dataset '{}'",
                    name, dataset.sprite_sheet, existing.sprite_sheet
                );
                rejected.push(name.clone());
                continue;
            }
            self.devices.insert(name.clone(), Arc::clone(&dataset));
        }
        rejected
    }

    /// Dataset registered for a device name.
    pub fn get(&self, device_name: &str) -> Option<&DeviceDataset> {
        self.devices.get(device_name).map(Arc::as_ref)
    }

    pub fn contains(&self, device_name: &str) -> bool {
        self.devices.contains_key(device_name)
    }

    /// Registered device names in registration order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
