//! The generic dot-matrix display driver contract being adapted.
//!
//! Dome-control code is written against this capability set, originally for
//! chains of MAX72xx-style matrix drivers: addressable devices, numbered
//! rows and columns, a 0..=15 intensity scale, and a power switch. Hardware
//! variants implement the trait with whatever subset the hardware supports;
//! unsupported operations are no-ops so the same control code runs
//! everywhere.
//!
//! The periscope prop is a single always-on virtual device, so its
//! implementation (see [`Periscope`](crate::periscope::Periscope)) keeps the
//! `device` and `count` parameters only for arity compatibility and stubs
//! out the power and device-management calls.

/// Full-scale value of the generic driver's intensity parameter.
///
/// [`LedControl::set_intensity`] maps `0..=INTENSITY_MAX` linearly onto the
/// implementation's physical brightness range.
pub const INTENSITY_MAX: u8 = 15;

/// Capability surface of a generic dot-matrix display driver.
///
/// Row and column addressing is 0-based. What a "row" means is up to the
/// implementation; the periscope treats it as a zone/channel selector (see
/// [`Row`](crate::periscope::Row)).
pub trait LedControl {
    /// Add `count` devices to the chain; returns the index of the first new
    /// device. Fixed-topology implementations return 0 and add nothing.
    fn add_device(&mut self, count: u8) -> u8;

    /// Number of devices in the chain.
    fn device_count(&self) -> u8;

    /// Whether the given device is currently powered.
    fn is_powered(&self, device: u8) -> bool;

    /// Switch `count` devices starting at `device` on or off.
    fn set_power(&mut self, device: u8, on: bool, count: u8);

    /// Set the scan limit (number of driven rows) on `count` devices.
    fn set_scan_limit(&mut self, device: u8, limit: u8, count: u8);

    /// Set display intensity, `0..=`[`INTENSITY_MAX`], on `count` devices.
    fn set_intensity(&mut self, device: u8, intensity: u8, count: u8);

    /// Blank the display on `count` devices.
    fn clear_display(&mut self, device: u8, count: u8);

    /// Set a single cell on or off.
    fn set_led(&mut self, device: u8, row: u8, column: u8, state: bool);

    /// Set a whole row from an 8-bit pattern, bit *i* for column *i*.
    fn set_row(&mut self, device: u8, row: u8, value: u8);

    /// Like [`set_row`](Self::set_row) but bypassing any shadow buffer.
    /// Implementations without one may ignore this.
    fn set_row_no_cache(&mut self, device: u8, row: u8, value: u8);

    /// Set a whole column from an 8-bit pattern, bit *i* for row *i*.
    fn set_column(&mut self, device: u8, column: u8, value: u8);

    /// Read back a row's pattern, 0 if unsupported.
    fn get_row(&self, device: u8, row: u8) -> u8;
}
