//! Pixel buffer and transmission contract for NeoPixel-style (WS2812) LED strips.
//!
//! A [`Frame1d`] holds one color per LED in strip-wiring order. [`transmit`] serializes a
//! frame to any [`PixelTransmitter`]: three bytes per LED in green, red, blue order, LED 0
//! first, followed by the [`LATCH_HOLD`] that makes the LEDs show the new colors.
//!
//! On the Pico the transmitter is [`PioWs2812Transmitter`](ws2812::PioWs2812Transmitter),
//! which feeds a PIO state machine one byte at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use digit_matrix::led_strip::{Frame1d, PixelTransmitter, colors, transmit};
//!
//! async fn example(transmitter: &mut impl PixelTransmitter) {
//!     let mut frame = Frame1d::<8>::new();
//!     frame.set(0, colors::BLUE);
//!     frame.set(7, colors::ORANGE);
//!     transmit(&frame, transmitter).await; // 24 bytes, then the latch hold
//! }
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `LIME`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`, `TEAL`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::Deref;

use embassy_time::Duration;
use smart_leds::RGB8;

#[cfg(not(feature = "host"))]
pub mod ws2812;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Minimum time the data line must stay idle after the last byte so the LEDs latch.
///
/// WS2812 parts latch after roughly 50 µs of low line; 100 µs leaves margin for clones.
pub const LATCH_HOLD: Duration = Duration::from_micros(100);

/// Number of bytes each LED takes on the wire.
pub const BYTES_PER_LED: usize = 3;

// ============================================================================
// Frame1d - the pixel buffer
// ============================================================================

/// [`Rgb`] pixel data for an LED strip, indexed in strip-wiring order.
///
/// The length is fixed by `N`. Frames deref to `[Rgb; N]` for reading; writes go through
/// [`set`](Self::set) and [`clear`](Self::clear).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>([Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Overwrite the color of one LED.
    ///
    /// `led_index` must be below `N`; indexes normally come from
    /// [`physical_index`](crate::led2d::physical_index), which only yields valid ones.
    pub fn set(&mut self, led_index: usize, color: Rgb) {
        self.0[led_index] = color;
    }

    /// Turn every LED off (black).
    pub fn clear(&mut self) {
        self.0 = [Rgb::new(0, 0, 0); N];
    }

    /// Iterate over the wire bytes of this frame: green, red, blue for LED 0, then LED 1, ...
    pub fn grb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().flat_map(|&color| grb(color))
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire order of one color: green, red, blue.
#[must_use]
pub const fn grb(color: Rgb) -> [u8; BYTES_PER_LED] {
    [color.g, color.r, color.b]
}

// ============================================================================
// PixelTransmitter - where frames go
// ============================================================================

/// Something that can carry color bytes to physical LEDs.
///
/// Implementations must provide backpressure: [`push_byte`](Self::push_byte) does not return
/// until the byte has been accepted (for example, into a hardware FIFO), so a frame is never
/// corrupted by overrunning the queue. There is no error path; a transmitter that cannot make
/// progress simply keeps waiting.
pub trait PixelTransmitter {
    /// Queue one byte for transmission, waiting while the queue is full.
    async fn push_byte(&mut self, byte: u8);

    /// Let the line idle for at least `hold` after the last queued byte has gone out, so the
    /// LEDs latch the frame. No byte may be pushed until this returns.
    async fn latch(&mut self, hold: Duration);
}

/// Send a whole frame, LED 0 first, in green-red-blue byte order, then hold for
/// [`LATCH_HOLD`].
///
/// See the [module documentation](mod@crate::led_strip) for an example.
pub async fn transmit<const N: usize>(frame: &Frame1d<N>, transmitter: &mut impl PixelTransmitter) {
    for byte in frame.grb_bytes() {
        transmitter.push_byte(byte).await;
    }
    transmitter.latch(LATCH_HOLD).await;
}
