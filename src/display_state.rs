//! The digit and redraw flag shared between button tasks and the render loop.
//!
//! Both fields are single atomic words. Button tasks are the only writers of the digit; the
//! render loop is the only reader that clears the flag. A `static` [`DisplayState`] is all
//! the coordination the firmware needs.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::button::DigitButton;
use crate::glyph::Digit;

/// Current digit plus a "needs redraw" flag, safe to share across tasks.
///
/// Starts at digit 0 with a redraw already requested, so the first poll draws it.
#[derive(Debug)]
pub struct DisplayState {
    digit: AtomicU8,
    redraw_pending: AtomicBool,
}

impl DisplayState {
    /// Create the state for a cold start: digit 0, redraw pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digit: AtomicU8::new(Digit::ZERO.as_u8()),
            redraw_pending: AtomicBool::new(true),
        }
    }

    /// The digit currently selected.
    #[must_use]
    pub fn digit(&self) -> Digit {
        Self::digit_from_word(self.digit.load(Ordering::Acquire))
    }

    /// Apply one accepted press: step the digit (wrapping) and request a redraw.
    ///
    /// Returns the new digit.
    pub fn step(&self, button: DigitButton) -> Digit {
        let stepped = |word: u8| Some(button.apply(Self::digit_from_word(word)).as_u8());
        let updated = self.digit.fetch_update(Ordering::AcqRel, Ordering::Acquire, stepped);
        // The closure never returns `None`, so both arms carry the previous value.
        let (Ok(previous) | Err(previous)) = updated;
        self.redraw_pending.store(true, Ordering::Release);
        button.apply(Self::digit_from_word(previous))
    }

    /// Clear the redraw request, returning whether one was pending.
    pub fn take_redraw(&self) -> bool {
        self.redraw_pending.swap(false, Ordering::AcqRel)
    }

    /// Whether a redraw has been requested and not yet taken.
    #[must_use]
    pub fn is_redraw_pending(&self) -> bool {
        self.redraw_pending.load(Ordering::Acquire)
    }

    /// Ask for a redraw without changing the digit.
    pub fn request_redraw(&self) {
        self.redraw_pending.store(true, Ordering::Release);
    }

    // Only `Digit` values are ever stored, so the fallback never triggers.
    fn digit_from_word(word: u8) -> Digit {
        Digit::new(word).unwrap_or(Digit::ZERO)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
