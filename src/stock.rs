//! Unordered pile of devices consumed and filled by strategies.

use crate::device::Device;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stock {
    devices: Vec<Device>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Take a device out. Devices of the same rank and stars are
    /// interchangeable, so this returns the last one added.
    pub fn pop(&mut self) -> Option<Device> {
        self.devices.pop()
    }

    /// Take `N` devices out, or none at all if fewer than `N` are left.
    pub fn pop_many<const N: usize>(&mut self) -> Option<[Device; N]> {
        if self.devices.len() < N {
            return None;
        }
        let tail = self.devices.split_off(self.devices.len() - N);
        tail.into_iter().rev().collect::<Vec<_>>().try_into().ok()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// One device per line, or "No devices".
    pub fn show(&self) -> String {
        if self.devices.is_empty() {
            return "No devices".to_string();
        }
        self.devices
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Device> for Stock {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl Extend<Device> for Stock {
    fn extend<I: IntoIterator<Item = Device>>(&mut self, iter: I) {
        self.devices.extend(iter);
    }
}

impl IntoIterator for Stock {
    type Item = Device;
    type IntoIter = std::vec::IntoIter<Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.into_iter()
    }
}
