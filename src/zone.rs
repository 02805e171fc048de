//! The six zone buffers: fixed-length pixel sequences and their color types.
//!
//! Each zone is an ordered, zero-indexed array of RGB pixels whose length is
//! fixed at compile time. The zone buffers are the sole owners of pixel
//! state; the transmission layer only ever sees copies of them (see
//! [`Periscope::frames`](crate::periscope::Periscope::frames)).

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// The mapping core uses `RED`, `GREEN`, `BLUE`, `YELLOW`, `CYAN`,
/// `MAGENTA`, `WHITE`, and `BLACK`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Number of pixels in the top ring.
pub const TOP_LEN: usize = 7;
/// Number of pixels in each side panel (left and right are the same shape).
pub const SIDE_LEN: usize = 9;
/// Number of pixels in the center strip.
pub const CENTER_LEN: usize = 9;
/// Number of physical pixels in the bottom ring.
pub const BOTTOM_LEN: usize = 8;
/// Number of pixels in the rear cluster.
pub const REAR_LEN: usize = 3;
/// Number of zones on the prop.
pub const ZONE_COUNT: usize = 6;

/// Identifies one of the six physical zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Zone {
    /// The 7-pixel top ring.
    Top,
    /// The left 9-pixel side panel.
    Left,
    /// The 9-pixel center strip.
    Center,
    /// The right 9-pixel side panel.
    Right,
    /// The 8-pixel bottom ring.
    Bottom,
    /// The 3-pixel rear cluster.
    Rear,
}

impl Zone {
    /// All zones, in setup/binding order.
    pub const ALL: [Self; ZONE_COUNT] = [
        Self::Top,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Bottom,
        Self::Rear,
    ];

    /// Number of physical pixels in this zone.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Top => TOP_LEN,
            Self::Left | Self::Right => SIDE_LEN,
            Self::Center => CENTER_LEN,
            Self::Bottom => BOTTOM_LEN,
            Self::Rear => REAR_LEN,
        }
    }
}

/// Fixed-length pixel buffer for one zone.
///
/// Derefs to `[Rgb; N]`, so pixels can be read and mutated like a plain
/// array, and slice methods (`fill`, `get_mut`, iteration) apply directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneFrame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> ZoneFrame<N> {
    /// Number of pixels in this zone.
    pub const LEN: usize = N;

    /// Create a new blank (all black) zone buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a zone buffer filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Read view of the zone's pixels.
    #[must_use]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.0
    }
}

impl<const N: usize> Deref for ZoneFrame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for ZoneFrame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for ZoneFrame<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> Default for ZoneFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}
