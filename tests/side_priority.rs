#![allow(missing_docs)]
//! Host-level tests for the side-panel priority color policy.

use droid_periscope::led_control::LedControl;
use droid_periscope::periscope::{Periscope, Row, side_flags};
use droid_periscope::periscope::board::BoardProfile;
use droid_periscope::zone::{Rgb, SIDE_LEN, Zone, colors};

fn rig() -> Periscope {
    Periscope::new(BoardProfile::PICO)
}

fn assert_side_filled(periscope: &Periscope, zone: Zone, color: Rgb) {
    let pixels = periscope.zone(zone);
    assert_eq!(pixels.len(), SIDE_LEN);
    for pixel in pixels {
        assert_eq!(*pixel, color);
    }
}

#[test]
fn each_flag_alone_selects_its_color() {
    let cases = [
        (side_flags::FRONT_RED, colors::RED),
        (side_flags::FRONT_GREEN, colors::GREEN),
        (side_flags::FRONT_BLUE, colors::BLUE),
        (side_flags::FRONT_YELLOW, colors::YELLOW),
        (side_flags::FRONT_CYAN, colors::CYAN),
        (side_flags::FRONT_MAGENTA, colors::MAGENTA),
        (side_flags::FRONT_WHITE, colors::WHITE),
        (side_flags::TOP_WHITE, colors::WHITE),
    ];
    for (flag, color) in cases {
        let mut periscope = rig();
        periscope.set_row(0, Row::Left as u8, flag);
        assert_side_filled(&periscope, Zone::Left, color);
    }
}

#[test]
fn first_priority_wins_over_combined_flags() {
    let mut periscope = rig();
    periscope.set_row(
        0,
        Row::Left as u8,
        side_flags::FRONT_RED | side_flags::FRONT_GREEN,
    );
    assert_side_filled(&periscope, Zone::Left, colors::RED);

    // Green still beats everything below it.
    periscope.set_row(
        0,
        Row::Left as u8,
        side_flags::FRONT_GREEN | side_flags::TOP_WHITE | side_flags::FRONT_MAGENTA,
    );
    assert_side_filled(&periscope, Zone::Left, colors::GREEN);
}

#[test]
fn no_flags_fills_black() {
    let mut periscope = rig();
    periscope.set_row(0, Row::Right as u8, side_flags::FRONT_CYAN);
    periscope.set_row(0, Row::Right as u8, 0);
    assert_side_filled(&periscope, Zone::Right, colors::BLACK);
}

#[test]
fn left_and_right_panels_are_independent() {
    let mut periscope = rig();
    periscope.set_row(0, Row::Left as u8, side_flags::FRONT_BLUE);
    periscope.set_row(0, Row::Right as u8, side_flags::FRONT_YELLOW);

    assert_side_filled(&periscope, Zone::Left, colors::BLUE);
    assert_side_filled(&periscope, Zone::Right, colors::YELLOW);
}

#[test]
fn side_panels_have_no_single_pixel_addressing() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Left as u8, 0, true);
    periscope.set_led(0, Row::Right as u8, 3, true);

    assert_side_filled(&periscope, Zone::Left, colors::BLACK);
    assert_side_filled(&periscope, Zone::Right, colors::BLACK);
    // Ignored, not rejected: no diagnostics for the unsupported form.
    assert_eq!(periscope.bounds_violations(), 0);
}
