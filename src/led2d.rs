//! The 5×5 LED matrix: its wiring and the renderer that draws one digit on it.
//!
//! The panel is a single serpentine strip mounted upside down, so the data line enters at
//! the bottom-right corner. [`physical_index`] turns a logical `(x, y)` cell into a strip
//! position and [`DigitDisplay`] paints a [`Digit`]'s glyph through it.
//!
//! ```text
//! Strip index of each logical cell (x → right, y ↓ down):
//!
//!   24  23  22  21  20
//!   15  16  17  18  19
//!   14  13  12  11  10
//!    5   6   7   8   9
//!    4   3   2   1   0
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use digit_matrix::display_state::DisplayState;
//! use digit_matrix::led2d::DigitDisplay;
//! use digit_matrix::led_strip::PixelTransmitter;
//!
//! async fn example(transmitter: impl PixelTransmitter, state: &DisplayState) {
//!     let mut digit_display = DigitDisplay::new(transmitter);
//!     digit_display.render_initial(state).await;
//!     // Later, after a button press:
//!     if let Some(digit) = digit_display.poll_once(state).await {
//!         assert_eq!(digit, state.digit());
//!     }
//! }
//! ```

pub mod layout;

pub use layout::LedLayout;

#[cfg(not(feature = "host"))]
use embassy_time::{Duration, Timer};

use crate::display_state::DisplayState;
use crate::glyph::Digit;
use crate::led_strip::{Frame1d, PixelTransmitter, transmit};

/// Columns on the matrix.
pub const MATRIX_WIDTH: usize = 5;
/// Rows on the matrix.
pub const MATRIX_HEIGHT: usize = 5;
/// LEDs on the matrix strip.
pub const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// How the matrix strip is wired: serpentine rows, rotated half a turn.
pub const MATRIX_LAYOUT: LedLayout<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
    LedLayout::serpentine_row_major().rotate_180();

/// How long the render loop sleeps between checks of the redraw flag.
#[cfg(not(feature = "host"))]
pub const REDRAW_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Strip index of the logical cell at column `x_index`, row `y_index` (both `0..5`).
///
/// Even rows run right-to-left from the end of the strip; odd rows run left-to-right.
///
/// # Panics
///
/// Panics if the cell is outside the matrix.
#[must_use]
pub const fn physical_index(x_index: usize, y_index: usize) -> usize {
    assert!(x_index < MATRIX_WIDTH && y_index < MATRIX_HEIGHT, "cell outside the matrix");
    if y_index % 2 == 0 {
        LED_COUNT - 1 - (y_index * MATRIX_WIDTH + x_index)
    } else {
        LED_COUNT - MATRIX_WIDTH - y_index * MATRIX_WIDTH + x_index
    }
}

// The closed form above must agree with the layout table.
const _: () = {
    let xy_to_index = MATRIX_LAYOUT.xy_to_index();
    let mut y_index = 0;
    while y_index < MATRIX_HEIGHT {
        let mut x_index = 0;
        while x_index < MATRIX_WIDTH {
            assert!(
                physical_index(x_index, y_index)
                    == xy_to_index[y_index * MATRIX_WIDTH + x_index] as usize,
                "physical_index disagrees with MATRIX_LAYOUT"
            );
            x_index += 1;
        }
        y_index += 1;
    }
};

// ============================================================================
// DigitDisplay - the renderer
// ============================================================================

/// Draws digits on the matrix through a [`PixelTransmitter`].
///
/// Owns the frame buffer. Each [`render`](Self::render) rebuilds the whole frame from black,
/// so the LEDs show exactly one glyph and nothing left over from the previous digit.
pub struct DigitDisplay<T: PixelTransmitter> {
    frame: Frame1d<LED_COUNT>,
    transmitter: T,
}

impl<T: PixelTransmitter> DigitDisplay<T> {
    /// Wrap a transmitter. The frame starts all black; nothing is sent until the first render.
    #[must_use]
    pub const fn new(transmitter: T) -> Self {
        Self {
            frame: Frame1d::new(),
            transmitter,
        }
    }

    /// Show `digit`: its glyph cells in its color, every other LED off.
    pub async fn render(&mut self, digit: Digit) {
        let glyph = digit.glyph();
        self.frame.clear();
        for (x_index, y_index) in glyph.lit_cells() {
            self.frame.set(physical_index(x_index, y_index), glyph.color());
        }
        self.transmit().await;
    }

    /// Send the current frame again, followed by the latch hold.
    pub async fn transmit(&mut self) {
        transmit(&self.frame, &mut self.transmitter).await;
    }

    /// Draw the current digit unconditionally and clear any pending redraw request.
    ///
    /// The render loop calls this once before it starts polling, so the matrix shows the
    /// digit even if nothing asked for a redraw. Returns the digit drawn.
    pub async fn render_initial(&mut self, state: &DisplayState) -> Digit {
        state.take_redraw();
        let digit = state.digit();
        self.render(digit).await;
        digit
    }

    /// If a redraw is pending, clear the request and render the current digit.
    ///
    /// The request is cleared before the digit is read, so a press that lands while the
    /// frame is going out leaves a fresh request for the next poll. Returns the digit drawn,
    /// or `None` if nothing was pending.
    pub async fn poll_once(&mut self, state: &DisplayState) -> Option<Digit> {
        if !state.take_redraw() {
            return None;
        }
        let digit = state.digit();
        self.render(digit).await;
        Some(digit)
    }

    /// The frame most recently rendered (all black before the first render).
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<LED_COUNT> {
        &self.frame
    }

    /// The underlying transmitter.
    #[must_use]
    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// The underlying transmitter, mutably.
    pub const fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    /// Draw the current digit, then redraw whenever `state` asks, forever.
    #[cfg(not(feature = "host"))]
    pub async fn run(&mut self, state: &DisplayState) -> ! {
        let digit = self.render_initial(state).await;
        defmt::info!("digit display: initial digit {}", digit.as_u8());

        loop {
            if let Some(digit) = self.poll_once(state).await {
                defmt::debug!("digit display: drew {}", digit.as_u8());
            }
            Timer::after(REDRAW_POLL_INTERVAL).await;
        }
    }
}
