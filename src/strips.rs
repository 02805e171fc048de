//! Transmission layer: flushes the zone buffers to the physical strips.
//!
//! The mapping core only mutates in-memory zone buffers; this module is the
//! separate "show" step. [`PeriscopeStrips::new`] claims one PIO state
//! machine, one DMA channel, and one GPIO per zone, then spawns a background
//! task that owns the six WS2812 drivers. [`PeriscopeStrips::show`] hands
//! the task a [`PeriscopeFrames`] snapshot; the task latches the most recent
//! snapshot and rewrites every strip on a fixed refresh tick, applying the
//! strip-wide brightness on the way out.
//!
//! # Example
//!
//! ```rust,no_run
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! # use core::convert::Infallible;
//! # use core::default::Default;
//! # use core::result::Result::Ok;
//! use droid_periscope::Result;
//! use droid_periscope::led_control::{INTENSITY_MAX, LedControl};
//! use droid_periscope::periscope::{Periscope, Row, board::BoardProfile};
//! use droid_periscope::strips::PeriscopeStrips;
//!
//! # #[embassy_executor::main]
//! # async fn main(spawner: embassy_executor::Spawner) -> ! {
//! #     let err = example(spawner).await.unwrap_err();
//! #     core::panic!("{err}");
//! # }
//! async fn example(spawner: embassy_executor::Spawner) -> Result<Infallible> {
//!     let p = embassy_rp::init(Default::default());
//!     let mut periscope = Periscope::new(BoardProfile::PICO);
//!     let strips = PeriscopeStrips::new(
//!         p.PIN_2, p.PIN_3, p.PIN_4, p.PIN_5, p.PIN_6, p.PIN_7,
//!         p.PIO0, p.PIO1,
//!         p.DMA_CH0, p.DMA_CH1, p.DMA_CH2, p.DMA_CH3, p.DMA_CH4, p.DMA_CH5,
//!         spawner,
//!         &mut periscope,
//!     )?;
//!
//!     periscope.set_intensity(0, INTENSITY_MAX, 1);
//!     periscope.set_row(0, Row::Bottom as u8, 0b10_1010);
//!     strips.show(&periscope);
//!     core::future::pending().await // run forever
//! }
//! ```

use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::{Pio, PioPin};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use smart_leds::brightness;
use static_cell::StaticCell;

use crate::periscope::{Periscope, PeriscopeFrames};
use crate::pio_irqs::{Pio0Irqs, Pio1Irqs};
use crate::zone::{BOTTOM_LEN, CENTER_LEN, REAR_LEN, Rgb, SIDE_LEN, TOP_LEN};
use crate::{Error, Result};

/// WS2812 wire color order used by every zone's strip.
pub type WireOrder = Grb;

/// Interval between flushes of the latched snapshot to the strips.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(30);

type FrameSignal = Signal<CriticalSectionRawMutex, PeriscopeFrames>;

static FRAMES: FrameSignal = Signal::new();
static STRIPS: StaticCell<PeriscopeStrips> = StaticCell::new();

/// Handle to the background refresh task that owns the six strip drivers.
///
/// One per program; the prop is a single physical device.
pub struct PeriscopeStrips {
    frames: &'static FrameSignal,
}

impl PeriscopeStrips {
    /// Claim the zone outputs and spawn the refresh task.
    ///
    /// Calls [`Periscope::setup`] to bind the zone buffers, so the pins and
    /// channels passed here must match the adapter's board profile. The top,
    /// left, center, and right zones run on PIO0 state machines 0-3; bottom
    /// and rear on PIO1 state machines 0-1.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyBound`] if the adapter was already set up;
    /// [`Error::TaskSpawn`] if the refresh task cannot be spawned.
    #[expect(clippy::too_many_arguments, reason = "one pin and DMA channel per zone")]
    pub fn new(
        top_pin: Peri<'static, impl PioPin>,
        left_pin: Peri<'static, impl PioPin>,
        center_pin: Peri<'static, impl PioPin>,
        right_pin: Peri<'static, impl PioPin>,
        bottom_pin: Peri<'static, impl PioPin>,
        rear_pin: Peri<'static, impl PioPin>,
        pio0: Peri<'static, PIO0>,
        pio1: Peri<'static, PIO1>,
        top_dma: Peri<'static, impl Channel>,
        left_dma: Peri<'static, impl Channel>,
        center_dma: Peri<'static, impl Channel>,
        right_dma: Peri<'static, impl Channel>,
        bottom_dma: Peri<'static, impl Channel>,
        rear_dma: Peri<'static, impl Channel>,
        spawner: Spawner,
        periscope: &mut Periscope,
    ) -> Result<&'static Self> {
        static PROGRAM0: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();
        static PROGRAM1: StaticCell<PioWs2812Program<'static, PIO1>> = StaticCell::new();

        let bindings = periscope.setup()?;
        for binding in &bindings {
            defmt::info!("periscope zone bound: {}", binding);
        }

        let Pio {
            mut common,
            sm0,
            sm1,
            sm2,
            sm3,
            ..
        } = Pio::new(pio0, Pio0Irqs);
        let program0 = PROGRAM0.init(PioWs2812Program::new(&mut common));
        let top = PioWs2812::<PIO0, 0, TOP_LEN, WireOrder>::new(
            &mut common,
            sm0,
            top_dma,
            top_pin,
            program0,
        );
        let left = PioWs2812::<PIO0, 1, SIDE_LEN, WireOrder>::new(
            &mut common,
            sm1,
            left_dma,
            left_pin,
            program0,
        );
        let center = PioWs2812::<PIO0, 2, CENTER_LEN, WireOrder>::new(
            &mut common,
            sm2,
            center_dma,
            center_pin,
            program0,
        );
        let right = PioWs2812::<PIO0, 3, SIDE_LEN, WireOrder>::new(
            &mut common,
            sm3,
            right_dma,
            right_pin,
            program0,
        );

        let Pio {
            common: mut rear_common,
            sm0: rear_sm0,
            sm1: rear_sm1,
            ..
        } = Pio::new(pio1, Pio1Irqs);
        let program1 = PROGRAM1.init(PioWs2812Program::new(&mut rear_common));
        let bottom = PioWs2812::<PIO1, 0, BOTTOM_LEN, WireOrder>::new(
            &mut rear_common,
            rear_sm0,
            bottom_dma,
            bottom_pin,
            program1,
        );
        let rear = PioWs2812::<PIO1, 1, REAR_LEN, WireOrder>::new(
            &mut rear_common,
            rear_sm1,
            rear_dma,
            rear_pin,
            program1,
        );

        let token = refresh_task(top, left, center, right, bottom, rear, &FRAMES);
        spawner.spawn(token).map_err(Error::TaskSpawn)?;

        Ok(STRIPS.init(Self { frames: &FRAMES }))
    }

    /// Queue the adapter's current zone state for the next refresh tick.
    ///
    /// Latest snapshot wins; calling faster than the refresh cadence simply
    /// replaces the pending snapshot.
    pub fn show(&self, periscope: &Periscope) {
        self.frames.signal(periscope.frames());
    }
}

#[embassy_executor::task]
async fn refresh_task(
    mut top: PioWs2812<'static, PIO0, 0, TOP_LEN, WireOrder>,
    mut left: PioWs2812<'static, PIO0, 1, SIDE_LEN, WireOrder>,
    mut center: PioWs2812<'static, PIO0, 2, CENTER_LEN, WireOrder>,
    mut right: PioWs2812<'static, PIO0, 3, SIDE_LEN, WireOrder>,
    mut bottom: PioWs2812<'static, PIO1, 0, BOTTOM_LEN, WireOrder>,
    mut rear: PioWs2812<'static, PIO1, 1, REAR_LEN, WireOrder>,
    frames: &'static FrameSignal,
) -> ! {
    defmt::info!("periscope refresh task started");
    let mut ticker = Ticker::every(REFRESH_INTERVAL);
    let mut current: Option<PeriscopeFrames> = None;
    loop {
        if let Some(next) = frames.try_take() {
            current = Some(next);
        }
        if let Some(snapshot) = &current {
            let level = snapshot.brightness;
            top.write(&scaled(&snapshot.top, level)).await;
            left.write(&scaled(&snapshot.left, level)).await;
            center.write(&scaled(&snapshot.center, level)).await;
            right.write(&scaled(&snapshot.right, level)).await;
            bottom.write(&scaled(&snapshot.bottom, level)).await;
            rear.write(&scaled(&snapshot.rear, level)).await;
        }
        ticker.next().await;
    }
}

/// Apply the strip-wide brightness scalar to one zone's pixels.
fn scaled<const N: usize>(frame: &[Rgb; N], level: u8) -> [Rgb; N] {
    let mut out = [Rgb::new(0, 0, 0); N];
    for (dst, src) in out
        .iter_mut()
        .zip(brightness(frame.iter().copied(), level))
    {
        *dst = src;
    }
    out
}
