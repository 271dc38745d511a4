// HomeState - centralized mutable state for the demo devices
//
// Commands mutate this struct; they never hold a receiver themselves. The
// setters print the device transitions, which is the demo's only output.

use std::fmt;

/// Binary device power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Power::On => write!(f, "ON"),
            Power::Off => write!(f, "OFF"),
        }
    }
}

/// Central state of the devices a RemoteControl can drive
pub struct HomeState {
    pub light: Power,
    pub tv: Power,
}

impl HomeState {
    /// All devices start off.
    pub fn new() -> Self {
        Self {
            light: Power::Off,
            tv: Power::Off,
        }
    }

    pub fn set_light(&mut self, power: Power) {
        self.light = power;
        println!("Light is {}", power);
    }

    pub fn set_tv(&mut self, power: Power) {
        self.tv = power;
        println!("TV is {}", power);
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
