//! The mapping core: translates generic grid writes into per-pixel writes
//! across the six periscope zones.
//!
//! Dome-control code addresses a virtual dot-matrix display. Each "row" of
//! that display is really a zone/channel selector on the prop — see [`Row`].
//! A row's 8-bit pattern value means different things per row:
//!
//! - **Top channel rows** expand one bit per pixel into a single color
//!   channel across the 7-pixel top ring; the three channels are
//!   independently settable.
//! - **Left/Right rows** treat the pattern as mutually exclusive priority
//!   flags (see [`side_flags`]) selecting one color for the whole panel.
//! - **Center/Bottom rows** expand one bit per logical position into the
//!   zone's fixed color (White and Red respectively).
//!
//! The bottom ring has 8 physical pixels but only 6 logical light segments;
//! [`BOTTOM_PAIRS`] records which pixel pair each segment lights:
//!
//! ```text
//! segment:  0      1      2      3      4      5
//! pixels:  {0,1}  {2,3}  {2,4}  {3,5}  {4,5}  {6,7}
//! ```
//!
//! Pixels 2-5 sit on seams shared by two adjacent segments; pixels 0, 1, 6,
//! and 7 belong to exactly one segment. The table encodes this specific
//! prop's wiring and must not be derived.
//!
//! All writes are bounds-checked against the target zone's length. An
//! out-of-range write is logged and skipped; nothing propagates to the
//! caller because the adapted driver contract has no error channel.

use crate::led_control::{INTENSITY_MAX, LedControl};
use crate::warn;
use crate::zone::{
    BOTTOM_LEN, CENTER_LEN, REAR_LEN, Rgb, SIDE_LEN, TOP_LEN, ZONE_COUNT, Zone, ZoneFrame, colors,
};
use crate::{Error, Result};

pub mod board;

use board::{BoardProfile, ZoneBinding};

/// Number of logical light segments on the bottom ring.
pub const BOTTOM_SEGMENTS: usize = 6;

/// Number of logical positions addressed by a center-row pattern.
///
/// One less than the 9-pixel strip: logical position *i* maps to physical
/// pixel *i + 1*, leaving pixel 0 reachable only through whole-zone fills.
pub const CENTER_POSITIONS: usize = 8;

/// Bottom-ring wiring: logical segment index to the physical pixel pair it
/// lights. Fixed data for this prop; see the module docs for the seam map.
pub const BOTTOM_PAIRS: [[usize; 2]; BOTTOM_SEGMENTS] =
    [[0, 1], [2, 3], [2, 4], [3, 5], [4, 5], [6, 7]];

/// Logical row selector: which zone (and for the top ring, which color
/// channel) a grid row addresses.
///
/// Discriminants are the row numbers dome-control code sends; rows outside
/// `0..=7` are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Row {
    /// Red channel of the top ring.
    TopRed = 0,
    /// Green channel of the top ring.
    TopGreen = 1,
    /// Blue channel of the top ring.
    TopBlue = 2,
    /// Left side panel (pattern writes only).
    Left = 3,
    /// Center strip.
    Center = 4,
    /// Right side panel (pattern writes only).
    Right = 5,
    /// Bottom ring, addressed by logical segment.
    Bottom = 6,
    /// Rear cluster (single-cell writes only).
    Rear = 7,
}

impl Row {
    /// Decode a generic driver row number, `None` for rows this prop does
    /// not have.
    #[must_use]
    pub const fn from_index(row: u8) -> Option<Self> {
        match row {
            0 => Some(Self::TopRed),
            1 => Some(Self::TopGreen),
            2 => Some(Self::TopBlue),
            3 => Some(Self::Left),
            4 => Some(Self::Center),
            5 => Some(Self::Right),
            6 => Some(Self::Bottom),
            7 => Some(Self::Rear),
            _ => None,
        }
    }
}

/// Side-panel priority flags.
///
/// A side-row pattern is not per-pixel: each bit requests one named color
/// for the whole panel, and when several are set the highest-priority one
/// wins. Priority order (highest first): front red, green, blue, yellow,
/// cyan, magenta, front white, top white. No flags set fills the panel
/// black.
pub mod side_flags {
    /// Fill the panel red (highest priority).
    pub const FRONT_RED: u8 = 1 << 0;
    /// Fill the panel green.
    pub const FRONT_GREEN: u8 = 1 << 1;
    /// Fill the panel blue.
    pub const FRONT_BLUE: u8 = 1 << 2;
    /// Fill the panel yellow.
    pub const FRONT_YELLOW: u8 = 1 << 3;
    /// Fill the panel cyan.
    pub const FRONT_CYAN: u8 = 1 << 4;
    /// Fill the panel magenta.
    pub const FRONT_MAGENTA: u8 = 1 << 5;
    /// Fill the panel white.
    pub const FRONT_WHITE: u8 = 1 << 6;
    /// White requested by the top-mounted control (lowest priority, also
    /// fills white).
    pub const TOP_WHITE: u8 = 1 << 7;
}

// Ordered rule list, first match wins. The order is a hard contract: it
// decides what shows when control code sets several flags at once.
const SIDE_PRIORITY: [(u8, Rgb); 8] = [
    (side_flags::FRONT_RED, colors::RED),
    (side_flags::FRONT_GREEN, colors::GREEN),
    (side_flags::FRONT_BLUE, colors::BLUE),
    (side_flags::FRONT_YELLOW, colors::YELLOW),
    (side_flags::FRONT_CYAN, colors::CYAN),
    (side_flags::FRONT_MAGENTA, colors::MAGENTA),
    (side_flags::FRONT_WHITE, colors::WHITE),
    (side_flags::TOP_WHITE, colors::WHITE),
];

fn side_color(pattern: u8) -> Rgb {
    for (flag, color) in SIDE_PRIORITY {
        if pattern & flag != 0 {
            return color;
        }
    }
    colors::BLACK
}

/// Map the generic driver's `0..=INTENSITY_MAX` scale linearly onto
/// `0..=ceiling`. Values above full scale clamp.
const fn scale_intensity(intensity: u8, ceiling: u8) -> u8 {
    let intensity = if intensity > INTENSITY_MAX {
        INTENSITY_MAX
    } else {
        intensity
    };
    ((intensity as u16 * ceiling as u16) / INTENSITY_MAX as u16) as u8
}

#[derive(Clone, Copy)]
enum TopChannel {
    Red,
    Green,
    Blue,
}

impl TopChannel {
    const fn name(self) -> &'static str {
        match self {
            Self::Red => "set_top_channel(red)",
            Self::Green => "set_top_channel(green)",
            Self::Blue => "set_top_channel(blue)",
        }
    }
}

/// Copy snapshot of all six zone buffers plus the strip-wide brightness.
///
/// This is what the transmission layer reads when flushing to the physical
/// strips; the adapter keeps sole ownership of the live buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriscopeFrames {
    /// Top ring pixels.
    pub top: [Rgb; TOP_LEN],
    /// Left panel pixels.
    pub left: [Rgb; SIDE_LEN],
    /// Center strip pixels.
    pub center: [Rgb; CENTER_LEN],
    /// Right panel pixels.
    pub right: [Rgb; SIDE_LEN],
    /// Bottom ring pixels.
    pub bottom: [Rgb; BOTTOM_LEN],
    /// Rear cluster pixels.
    pub rear: [Rgb; REAR_LEN],
    /// Strip-wide brightness scalar, 0-255.
    pub brightness: u8,
}

/// Adapter between the [`LedControl`] grid contract and the six-zone prop.
///
/// Construction clears every zone to black with zero brightness. Call
/// [`setup`](Self::setup) once to bind the zone outputs, then drive the
/// display through the [`LedControl`] methods. A separate transmission step
/// (`strips` on target builds) flushes [`frames`](Self::frames) snapshots to
/// the physical strips on a fixed cadence.
pub struct Periscope {
    top: ZoneFrame<TOP_LEN>,
    left: ZoneFrame<SIDE_LEN>,
    center: ZoneFrame<CENTER_LEN>,
    right: ZoneFrame<SIDE_LEN>,
    bottom: ZoneFrame<BOTTOM_LEN>,
    rear: ZoneFrame<REAR_LEN>,
    brightness: u8,
    profile: BoardProfile,
    bound: bool,
    bounds_violations: u32,
}

impl Periscope {
    /// Create the adapter for the given board profile: all zones black,
    /// brightness zero.
    #[must_use]
    pub const fn new(profile: BoardProfile) -> Self {
        Self {
            top: ZoneFrame::new(),
            left: ZoneFrame::new(),
            center: ZoneFrame::new(),
            right: ZoneFrame::new(),
            bottom: ZoneFrame::new(),
            rear: ZoneFrame::new(),
            brightness: 0,
            profile,
            bound: false,
            bounds_violations: 0,
        }
    }

    /// One-time binding of the zone buffers to their physical outputs.
    ///
    /// Returns the six [`ZoneBinding`]s (zone, data pin, pixel count) for
    /// the transmission layer to claim.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyBound`] if called a second time; rebinding at runtime
    /// is unsupported.
    pub fn setup(&mut self) -> Result<[ZoneBinding; ZONE_COUNT]> {
        if self.bound {
            return Err(Error::AlreadyBound);
        }
        self.bound = true;
        Ok(self.profile.bindings())
    }

    /// Directly fill the center strip white (on) or black (off).
    ///
    /// This is the one capability outside the [`LedControl`] contract: the
    /// search light effect addresses the whole center strip, including
    /// pixel 0, which per-column writes never touch.
    pub fn set_search_light(&mut self, state: bool) {
        let color = if state { colors::WHITE } else { colors::BLACK };
        self.center = ZoneFrame::filled(color);
    }

    /// Read view of one zone's pixels.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &[Rgb] {
        match zone {
            Zone::Top => self.top.as_slice(),
            Zone::Left => self.left.as_slice(),
            Zone::Center => self.center.as_slice(),
            Zone::Right => self.right.as_slice(),
            Zone::Bottom => self.bottom.as_slice(),
            Zone::Rear => self.rear.as_slice(),
        }
    }

    /// Current strip-wide brightness scalar, 0-255.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Board profile this adapter was constructed with.
    #[must_use]
    pub const fn profile(&self) -> &BoardProfile {
        &self.profile
    }

    /// Number of writes rejected by bounds checking since construction.
    ///
    /// Each rejected call increments this exactly once, alongside the logged
    /// diagnostic.
    #[must_use]
    pub const fn bounds_violations(&self) -> u32 {
        self.bounds_violations
    }

    /// Snapshot all six zones plus brightness for the flush step.
    #[must_use]
    pub fn frames(&self) -> PeriscopeFrames {
        PeriscopeFrames {
            top: *self.top,
            left: *self.left,
            center: *self.center,
            right: *self.right,
            bottom: *self.bottom,
            rear: *self.rear,
            brightness: self.brightness,
        }
    }

    fn reject_write(&mut self, site: &str, index: usize, len: usize) {
        warn!("{}: index {} out of bounds (len {})", site, index, len);
        self.bounds_violations = self.bounds_violations.wrapping_add(1);
    }

    fn set_top_channel(&mut self, index: usize, channel: TopChannel, value: u8) {
        let Some(pixel) = self.top.get_mut(index) else {
            self.reject_write(channel.name(), index, TOP_LEN);
            return;
        };
        match channel {
            TopChannel::Red => pixel.r = value,
            TopChannel::Green => pixel.g = value,
            TopChannel::Blue => pixel.b = value,
        }
    }

    fn set_top_pattern(&mut self, channel: TopChannel, pattern: u8) {
        for col in 0..TOP_LEN {
            let value = if pattern & (1u8 << col) != 0 { 0xFF } else { 0x00 };
            self.set_top_channel(col, channel, value);
        }
    }

    // Logical position i lands on physical pixel i + 1; the bounds check is
    // on the computed physical index.
    fn set_center_led(&mut self, index: usize, color: Rgb) {
        let physical = index.saturating_add(1);
        let Some(pixel) = self.center.get_mut(physical) else {
            self.reject_write("set_center_led", physical, CENTER_LEN);
            return;
        };
        *pixel = color;
    }

    fn set_center_pattern(&mut self, pattern: u8) {
        for col in 0..CENTER_POSITIONS {
            let color = if pattern & (1u8 << col) != 0 {
                colors::WHITE
            } else {
                colors::BLACK
            };
            self.set_center_led(col, color);
        }
    }

    fn set_bottom_led(&mut self, index: usize, color: Rgb) {
        let Some(pair) = BOTTOM_PAIRS.get(index) else {
            self.reject_write("set_bottom_led", index, BOTTOM_SEGMENTS);
            return;
        };
        for &physical in pair {
            // Table entries are always within the 8-pixel ring.
            if let Some(pixel) = self.bottom.get_mut(physical) {
                *pixel = color;
            }
        }
    }

    fn set_bottom_pattern(&mut self, pattern: u8) {
        for col in 0..BOTTOM_SEGMENTS {
            let color = if pattern & (1u8 << col) != 0 {
                colors::RED
            } else {
                colors::BLACK
            };
            self.set_bottom_led(col, color);
        }
    }

    fn set_rear_led(&mut self, index: usize, color: Rgb) {
        let Some(pixel) = self.rear.get_mut(index) else {
            self.reject_write("set_rear_led", index, REAR_LEN);
            return;
        };
        *pixel = color;
    }
}

impl LedControl for Periscope {
    // The prop is one fixed virtual device; the chain-management calls are
    // constant stubs kept for contract compatibility.
    fn add_device(&mut self, _count: u8) -> u8 {
        0
    }

    fn device_count(&self) -> u8 {
        1
    }

    fn is_powered(&self, _device: u8) -> bool {
        false
    }

    fn set_power(&mut self, _device: u8, _on: bool, _count: u8) {}

    fn set_scan_limit(&mut self, _device: u8, _limit: u8, _count: u8) {}

    fn set_intensity(&mut self, _device: u8, intensity: u8, _count: u8) {
        self.brightness = scale_intensity(intensity, self.profile.max_brightness);
    }

    fn clear_display(&mut self, _device: u8, _count: u8) {
        self.top = ZoneFrame::new();
        self.left = ZoneFrame::new();
        self.center = ZoneFrame::new();
        self.right = ZoneFrame::new();
        self.bottom = ZoneFrame::new();
        self.rear = ZoneFrame::new();
    }

    fn set_led(&mut self, _device: u8, row: u8, column: u8, state: bool) {
        let Some(row) = Row::from_index(row) else {
            return;
        };
        let column = column as usize;
        let channel_value = if state { 0xFF } else { 0x00 };
        let red_or_black = if state { colors::RED } else { colors::BLACK };
        match row {
            Row::TopRed => self.set_top_channel(column, TopChannel::Red, channel_value),
            Row::TopGreen => self.set_top_channel(column, TopChannel::Green, channel_value),
            Row::TopBlue => self.set_top_channel(column, TopChannel::Blue, channel_value),
            Row::Center => {
                let color = if state { colors::WHITE } else { colors::BLACK };
                self.set_center_led(column, color);
            }
            Row::Bottom => self.set_bottom_led(column, red_or_black),
            // Two logical columns share one rear pixel.
            Row::Rear => self.set_rear_led(column >> 1, red_or_black),
            // The side panels have no single-pixel addressing.
            Row::Left | Row::Right => {}
        }
    }

    fn set_row(&mut self, _device: u8, row: u8, value: u8) {
        let Some(row) = Row::from_index(row) else {
            return;
        };
        match row {
            Row::TopRed => self.set_top_pattern(TopChannel::Red, value),
            Row::TopGreen => self.set_top_pattern(TopChannel::Green, value),
            Row::TopBlue => self.set_top_pattern(TopChannel::Blue, value),
            Row::Left => {
                let color = side_color(value);
                self.left.fill(color);
            }
            Row::Right => {
                let color = side_color(value);
                self.right.fill(color);
            }
            Row::Center => self.set_center_pattern(value),
            Row::Bottom => self.set_bottom_pattern(value),
            // The rear cluster has no pattern form.
            Row::Rear => {}
        }
    }

    fn set_row_no_cache(&mut self, _device: u8, _row: u8, _value: u8) {}

    fn set_column(&mut self, _device: u8, _column: u8, _value: u8) {}

    fn get_row(&self, _device: u8, _row: u8) -> u8 {
        0
    }
}
