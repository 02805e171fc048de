//! Drive a droid periscope light prop through a generic dot-matrix driver interface.
//!
//! The prop is built from six independently wired WS2812 (NeoPixel) strips with
//! irregular shapes: a 7-pixel top ring, two 9-pixel side panels, a 9-pixel
//! center strip, an 8-pixel bottom ring wired as overlapping pairs, and a
//! 3-pixel rear cluster. Generic dome-control code addresses a virtual grid of
//! device/row/column cells; this crate translates those grid writes into
//! per-pixel color writes across the six zones.
//!
//! # Layout
//!
//! - [`periscope`] — the mapping core: row routing, pattern decoding, the
//!   bottom-ring pair table, and the brightness shim. Pure logic, testable on
//!   the host with the `host` feature.
//! - [`led_control`] — the generic dot-matrix driver contract being adapted.
//! - [`zone`] — the six fixed-length zone buffers and color types.
//! - `strips` (target-only) — transmission layer that flushes the zone
//!   buffers to the physical strips on a fixed refresh tick.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

mod error;
pub mod led_control;
pub mod periscope;
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;
#[cfg(not(feature = "host"))]
pub mod strips;
pub mod zone;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

// Bounds-violation diagnostics go to defmt on target builds and to stderr
// during host tests.
#[cfg(not(feature = "host"))]
pub(crate) use defmt::warn;
#[cfg(feature = "host")]
pub(crate) use std::eprintln as warn;
