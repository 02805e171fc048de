#![allow(missing_docs)]
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use droid_periscope::Result;
use droid_periscope::led_control::{INTENSITY_MAX, LedControl};
use droid_periscope::periscope::{Periscope, Row, board::BoardProfile, side_flags};
use droid_periscope::strips::PeriscopeStrips;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut periscope = Periscope::new(BoardProfile::PICO);
    let strips = PeriscopeStrips::new(
        p.PIN_2, p.PIN_3, p.PIN_4, p.PIN_5, p.PIN_6, p.PIN_7, p.PIO0, p.PIO1, p.DMA_CH0,
        p.DMA_CH1, p.DMA_CH2, p.DMA_CH3, p.DMA_CH4, p.DMA_CH5, spawner, &mut periscope,
    )?;
    periscope.set_intensity(0, INTENSITY_MAX, 1);

    // Walk a dot around the top ring and the bottom segments while the side
    // panels hold complementary colors.
    let mut tick: u8 = 0;
    loop {
        periscope.clear_display(0, 1);
        periscope.set_row(0, Row::TopRed as u8, 1u8 << (tick % 7));
        periscope.set_row(0, Row::TopBlue as u8, 1u8 << (tick.wrapping_add(3) % 7));
        periscope.set_row(0, Row::Bottom as u8, 1u8 << (tick % 6));
        periscope.set_row(0, Row::Left as u8, side_flags::FRONT_CYAN);
        periscope.set_row(0, Row::Right as u8, side_flags::FRONT_MAGENTA);
        periscope.set_led(0, Row::Center as u8, tick % 8, true);
        strips.show(&periscope);

        tick = tick.wrapping_add(1);
        Timer::after(Duration::from_millis(250)).await;
    }
}
