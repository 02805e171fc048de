//! Declarative board configuration: which GPIO carries each zone's data
//! line, and the global brightness ceiling.
//!
//! Pin assignments and the brightness ceiling are plain data injected at
//! construction. Nothing here is logic; a different build of the prop
//! substitutes a different profile without touching the mapping core. Zone pixel counts are compile-time constants (see
//! [`zone`](crate::zone)) and the WS2812 wire color order is a type
//! parameter of the transmission layer, so neither appears here.

use crate::zone::{BOTTOM_LEN, CENTER_LEN, REAR_LEN, SIDE_LEN, TOP_LEN, ZONE_COUNT, Zone};

/// Per-board configuration for the periscope adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct BoardProfile {
    /// GPIO number of the top ring's data line.
    pub top_pin: u8,
    /// GPIO number of the left panel's data line.
    pub left_pin: u8,
    /// GPIO number of the center strip's data line.
    pub center_pin: u8,
    /// GPIO number of the right panel's data line.
    pub right_pin: u8,
    /// GPIO number of the bottom ring's data line.
    pub bottom_pin: u8,
    /// GPIO number of the rear cluster's data line.
    pub rear_pin: u8,
    /// Maximum physical brightness, 0-255. The generic driver's intensity
    /// scale maps linearly onto `0..=max_brightness`.
    pub max_brightness: u8,
}

impl BoardProfile {
    /// Default wiring for the Pico build of the prop: data lines on GP2-GP7
    /// in zone order, brightness capped at 80 to stay within the USB power
    /// budget.
    pub const PICO: Self = Self {
        top_pin: 2,
        left_pin: 3,
        center_pin: 4,
        right_pin: 5,
        bottom_pin: 6,
        rear_pin: 7,
        max_brightness: 80,
    };

    /// The zone-to-output bindings this profile describes, in
    /// [`Zone::ALL`] order.
    #[must_use]
    pub const fn bindings(&self) -> [ZoneBinding; ZONE_COUNT] {
        [
            ZoneBinding {
                zone: Zone::Top,
                pin: self.top_pin,
                len: TOP_LEN,
            },
            ZoneBinding {
                zone: Zone::Left,
                pin: self.left_pin,
                len: SIDE_LEN,
            },
            ZoneBinding {
                zone: Zone::Center,
                pin: self.center_pin,
                len: CENTER_LEN,
            },
            ZoneBinding {
                zone: Zone::Right,
                pin: self.right_pin,
                len: SIDE_LEN,
            },
            ZoneBinding {
                zone: Zone::Bottom,
                pin: self.bottom_pin,
                len: BOTTOM_LEN,
            },
            ZoneBinding {
                zone: Zone::Rear,
                pin: self.rear_pin,
                len: REAR_LEN,
            },
        ]
    }
}

/// One zone's physical output: the GPIO carrying its data line and its
/// pixel count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct ZoneBinding {
    /// Which zone this binding describes.
    pub zone: Zone,
    /// GPIO number of the zone's data line.
    pub pin: u8,
    /// Number of pixels on the zone's strip.
    pub len: usize,
}
