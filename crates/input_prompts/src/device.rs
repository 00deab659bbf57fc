//! Physical devices and the signals the host feeds into the tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Runtime identity of a connected device instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse device category used for the default-device priority list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DeviceKind {
    Gamepad,
    Keyboard,
    Mouse,
    Touchscreen,
    Joystick,
    Pen,
    Other,
}

/// A connected input device.
///
/// Two devices are the same when their [`DeviceId`]s match; `name` is the
/// identity string datasets are registered under (several identical pads
/// share one name).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
}

impl Device {
    pub fn new(id: u32, name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: DeviceId(id),
            name: name.into(),
            kind,
        }
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.id)
    }
}

/// Connectivity change reported for a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum DeviceChange {
    Connected,
    Disconnected,
    Added,
    Removed,
}

impl DeviceChange {
    /// Returns `true` when the device is no longer usable.
    pub fn is_loss(self) -> bool {
        matches!(self, DeviceChange::Disconnected | DeviceChange::Removed)
    }
}

/// A device-activity signal delivered by the host's input layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceSignal {
    /// Any button or key was pressed on the device.
    ButtonPressed(Device),
    /// The device's connectivity changed.
    Changed(Device, DeviceChange),
}

/// Access to the devices connected right now, in enumeration order.
pub trait DeviceSource {
    fn connected_devices(&self) -> Vec<Device>;
}

impl DeviceSource for [Device] {
    fn connected_devices(&self) -> Vec<Device> {
        self.to_vec()
    }
}

impl DeviceSource for Vec<Device> {
    fn connected_devices(&self) -> Vec<Device> {
        self.clone()
    }
}

impl<const N: usize> DeviceSource for [Device; N] {
    fn connected_devices(&self) -> Vec<Device> {
        self.to_vec()
    }
}

/// Platform the application runs on, used to pick a forced prompt dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Ios,
    Android,
    Web,
    Switch,
    PlayStation,
    Xbox,
    Unknown,
}

impl Platform {
    /// The platform of the compile target. Consoles are never detected here;
    /// hosts pass them explicitly.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_family = "wasm") {
            Platform::Web
        } else {
            Platform::Unknown
        }
    }
}
