//! Active device tracking.
//!
//! The tracker follows a last-input-wins rule: whichever device last had a
//! button pressed is active. Before any input, and after the active device
//! disconnects, a default is picked from the connected devices by walking a
//! priority list of device kinds.
//!
//! Observers are called synchronously, in subscription order, from inside the
//! signal handler that changed the active device.

use crate::device::{Device, DeviceChange, DeviceKind, DeviceSource};
use std::fmt;
use tracing::debug;

/// Handle returned by [`ActiveDeviceTracker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(Option<&Device>)>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum TrackerState {
    Uninitialized,
    Active(Device),
    NoActiveDevice,
}

/// Tracks the device the player is currently using.
pub struct ActiveDeviceTracker {
    state: TrackerState,
    priority: Vec<DeviceKind>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl Default for ActiveDeviceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveDeviceTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Uninitialized,
            priority: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Pick the initial device from what is connected now.
    ///
    /// Resets any previous state. Observers are kept but not notified.
    pub fn init(&mut self, priority: Vec<DeviceKind>, devices: &(impl DeviceSource + ?Sized)) {
        self.priority = priority;
        let connected = devices.connected_devices();
        self.state = match select_default(&self.priority, &connected, None) {
            Some(device) => {
                debug!("Initial active device: {device}");
                TrackerState::Active(device)
            }
            None => {
                debug!("No connected device matches the default priority list");
                TrackerState::NoActiveDevice
            }
        };
    }

    /// Return to the uninitialized state. Observers are kept.
    pub fn reset(&mut self) {
        self.state = TrackerState::Uninitialized;
        self.priority.clear();
    }

    pub fn is_initialized(&self) -> bool {
        self.state != TrackerState::Uninitialized
    }

    /// The device currently considered active.
    pub fn current(&self) -> Option<&Device> {
        match &self.state {
            TrackerState::Active(device) => Some(device),
            _ => None,
        }
    }

    /// Priority list used for default selection.
    pub fn priority(&self) -> &[DeviceKind] {
        &self.priority
    }

    /// A button was pressed on `device`.
    ///
    /// Returns `true` if the active device changed. Presses on the already
    /// active device and signals before [`init`](Self::init) are ignored.
    pub fn on_button_pressed(&mut self, device: &Device) -> bool {
        match &self.state {
            TrackerState::Uninitialized => return false,
            TrackerState::Active(current) if current == device => return false,
            _ => {}
        }
        debug!("Active device changed to {device}");
        self.state = TrackerState::Active(device.clone());
        self.notify();
        true
    }

    /// Connectivity of `device` changed.
    ///
    /// Only the loss of the active device has an effect: a new default is
    /// selected from `devices` (never the lost device itself) and observers
    /// are always notified, even when nothing could be selected.
    pub fn on_device_change(
        &mut self,
        device: &Device,
        change: DeviceChange,
        devices: &(impl DeviceSource + ?Sized),
    ) -> bool {
        if !change.is_loss() || self.current() != Some(device) {
            return false;
        }

        let connected = devices.connected_devices();
        self.state = match select_default(&self.priority, &connected, Some(device)) {
            Some(fallback) => {
                debug!("Active device {device} {change}, falling back to {fallback}");
                TrackerState::Active(fallback)
            }
            None => {
                debug!("Active device {device} {change}, no fallback available");
                TrackerState::NoActiveDevice
            }
        };
        self.notify();
        true
    }

    /// Register a callback invoked with the new device on every change.
    pub fn subscribe(&mut self, observer: impl FnMut(Option<&Device>) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let current = match &self.state {
            TrackerState::Active(device) => Some(device),
            _ => None,
        };
        for (_, observer) in &mut self.observers {
            observer(current);
        }
    }
}

impl fmt::Debug for ActiveDeviceTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveDeviceTracker")
            .field("state", &self.state)
            .field("priority", &self.priority)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// First connected device of the first kind in `priority` that has one.
fn select_default(
    priority: &[DeviceKind],
    connected: &[Device],
    excluded: Option<&Device>,
) -> Option<Device> {
    priority.iter().find_map(|kind| {
        connected
            .iter()
            .filter(|device| Some(*device) != excluded)
            .find(|device| device.kind == *kind)
            .cloned()
    })
}
