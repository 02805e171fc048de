#![allow(missing_docs)]
//! Host-level tests for the row router and zone index mapping.

use droid_periscope::led_control::LedControl;
use droid_periscope::periscope::{BOTTOM_PAIRS, BOTTOM_SEGMENTS, Periscope, Row};
use droid_periscope::periscope::board::BoardProfile;
use droid_periscope::zone::{BOTTOM_LEN, CENTER_LEN, Rgb, TOP_LEN, Zone, colors};

fn rig() -> Periscope {
    Periscope::new(BoardProfile::PICO)
}

#[test]
fn top_pattern_bit_zero_sets_pixel_zero_red() {
    let mut periscope = rig();
    periscope.set_row(0, Row::TopRed as u8, 0b000_0001);

    let top: Vec<Rgb> = periscope.zone(Zone::Top).to_vec();
    assert_eq!(top.first().copied(), Some(colors::RED));
    for pixel in top.iter().skip(1) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn top_channels_are_independent() {
    let mut periscope = rig();
    periscope.set_row(0, Row::TopRed as u8, 0b000_0001);
    periscope.set_row(0, Row::TopGreen as u8, 0b000_0001);

    // Both channels set on pixel 0, not overwritten.
    assert_eq!(
        periscope.zone(Zone::Top).first().copied(),
        Some(Rgb::new(0xFF, 0xFF, 0))
    );
}

#[test]
fn top_pattern_clears_unset_bits_within_its_channel_only() {
    let mut periscope = rig();
    periscope.set_row(0, Row::TopGreen as u8, 0b111_1111);
    periscope.set_row(0, Row::TopRed as u8, 0b000_0010);

    // Red landed on pixel 1; the full-green fill survives everywhere.
    for (index, pixel) in periscope.zone(Zone::Top).iter().enumerate() {
        let expected_red = if index == 1 { 0xFF } else { 0 };
        assert_eq!(pixel.r, expected_red);
        assert_eq!(pixel.g, 0xFF);
        assert_eq!(pixel.b, 0);
    }
}

#[test]
fn top_set_led_out_of_range_is_logged_no_op() {
    let mut periscope = rig();
    periscope.set_led(0, Row::TopBlue as u8, TOP_LEN as u8, true);

    assert_eq!(periscope.bounds_violations(), 1);
    for pixel in periscope.zone(Zone::Top) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn bottom_segment_lights_its_pixel_pair() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Bottom as u8, 2, true);

    let lit: Vec<usize> = periscope
        .zone(Zone::Bottom)
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel == colors::RED)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(lit, vec![2, 4]);
}

#[test]
fn bottom_segment_zero_lights_only_pixels_zero_and_one() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Bottom as u8, 0, true);

    let lit: Vec<usize> = periscope
        .zone(Zone::Bottom)
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel == colors::RED)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(lit, vec![0, 1]);
}

#[test]
fn bottom_seams_overlap_only_where_documented() {
    // Segments 2 and 3 share no pair entry, but sit on adjacent seams.
    let mut periscope = rig();
    periscope.set_led(0, Row::Bottom as u8, 2, true); // pixels 2, 4
    periscope.set_led(0, Row::Bottom as u8, 3, true); // pixels 3, 5

    let lit: Vec<usize> = periscope
        .zone(Zone::Bottom)
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel == colors::RED)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(lit, vec![2, 3, 4, 5]);
}

#[test]
fn bottom_pair_table_covers_ring_with_expected_seams() {
    let mut appearances = [0_usize; BOTTOM_LEN];
    for pair in BOTTOM_PAIRS {
        for physical in pair {
            if let Some(count) = appearances.get_mut(physical) {
                *count += 1;
            }
        }
    }
    assert_eq!(appearances, [1, 1, 2, 2, 2, 2, 1, 1]);
}

#[test]
fn bottom_pattern_sets_red_per_segment() {
    let mut periscope = rig();
    periscope.set_row(0, Row::Bottom as u8, 0b00_0001);
    assert_eq!(
        periscope.zone(Zone::Bottom).first().copied(),
        Some(colors::RED)
    );

    // Clearing the bit blacks the pair again.
    periscope.set_row(0, Row::Bottom as u8, 0b00_0000);
    for pixel in periscope.zone(Zone::Bottom) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn bottom_segment_beyond_table_is_logged_no_op() {
    let mut periscope = rig();
    // Physical pixels 6 and 7 exist, but logical segments stop at 5.
    periscope.set_led(0, Row::Bottom as u8, BOTTOM_SEGMENTS as u8, true);

    assert_eq!(periscope.bounds_violations(), 1);
    for pixel in periscope.zone(Zone::Bottom) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn center_column_maps_to_physical_index_plus_one() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Center as u8, 0, true);

    let center = periscope.zone(Zone::Center);
    assert_eq!(center.first().copied(), Some(colors::BLACK));
    assert_eq!(center.get(1).copied(), Some(colors::WHITE));
}

#[test]
fn center_pattern_leaves_pixel_zero_untouched() {
    let mut periscope = rig();
    periscope.set_row(0, Row::Center as u8, 0xFF);

    let center = periscope.zone(Zone::Center);
    assert_eq!(center.first().copied(), Some(colors::BLACK));
    for pixel in center.iter().skip(1) {
        assert_eq!(*pixel, colors::WHITE);
    }
}

#[test]
fn center_last_logical_column_is_out_of_range() {
    let mut periscope = rig();
    // Logical 8 computes physical 9 on a 9-pixel strip.
    periscope.set_led(0, Row::Center as u8, (CENTER_LEN - 1) as u8, true);

    assert_eq!(periscope.bounds_violations(), 1);
    for pixel in periscope.zone(Zone::Center) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn rear_columns_pair_onto_physical_pixels() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Rear as u8, 4, true);
    periscope.set_led(0, Row::Rear as u8, 5, true);

    // Columns 4 and 5 both land on pixel 2.
    let rear = periscope.zone(Zone::Rear);
    assert_eq!(rear.get(2).copied(), Some(colors::RED));
    assert_eq!(rear.first().copied(), Some(colors::BLACK));
    assert_eq!(rear.get(1).copied(), Some(colors::BLACK));
}

#[test]
fn rear_column_beyond_cluster_is_logged_no_op() {
    let mut periscope = rig();
    periscope.set_led(0, Row::Rear as u8, 6, true); // pixel 3 of 3

    assert_eq!(periscope.bounds_violations(), 1);
    for pixel in periscope.zone(Zone::Rear) {
        assert_eq!(*pixel, colors::BLACK);
    }
}

#[test]
fn each_rejected_write_counts_exactly_once() {
    let mut periscope = rig();
    periscope.set_led(0, Row::TopRed as u8, 100, true);
    periscope.set_led(0, Row::Bottom as u8, 100, true);
    periscope.set_led(0, Row::Center as u8, 100, true);

    assert_eq!(periscope.bounds_violations(), 3);
}

#[test]
fn unknown_rows_are_ignored() {
    let mut periscope = rig();
    let before = periscope.frames();
    periscope.set_led(0, 8, 0, true);
    periscope.set_row(0, 200, 0xFF);

    assert_eq!(periscope.frames(), before);
    assert_eq!(periscope.bounds_violations(), 0);
}
