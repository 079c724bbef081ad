//! Show a single decimal digit on a 5×5 WS2812 matrix driven by a Raspberry Pi Pico.
//!
//! Two buttons step the digit up and down (wrapping 9 ↔ 0), and a status LED blinks on its
//! own schedule so you can tell the firmware is alive.
//!
//! # Pieces
//!
//! - [`glyph`]: the ten digit patterns and their colors, plus the [`Digit`](glyph::Digit) type.
//! - [`led2d`]: the matrix wiring ([`physical_index`](led2d::physical_index)) and the
//!   [`DigitDisplay`](led2d::DigitDisplay) renderer.
//! - [`led_strip`]: the pixel buffer and the [`PixelTransmitter`](led_strip::PixelTransmitter)
//!   contract; on the Pico, a PIO-based WS2812 transmitter.
//! - [`display_state`]: the digit and redraw flag shared by the button tasks and the render loop.
//! - [`button`]: per-button debouncing and the tasks that watch the button pins.
//! - [`status_blinker`]: the heartbeat LED.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   small state machines that generate the WS2812 bit timing. Pico 1 has 2 PIO blocks; Pico 2 has 3.
//! - **Serpentine wiring:** a strip laid across the panel with alternate rows running in
//!   opposite directions.
//! - **Debounce window:** minimum time between accepted presses of the same button.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: the firmware runs on the ARM cores only
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

pub mod button;
pub mod display_state;
mod error;
pub mod glyph;
pub mod led2d;
pub mod led_strip;
pub mod status_blinker;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
