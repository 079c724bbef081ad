//! The ten digit glyphs shown on the 5×5 matrix, plus the [`Digit`] type that indexes them.
//!
//! Each [`Glyph`] is a 5×5 lit/unlit pattern paired with the color its lit cells get.
//! The table is built at compile time from row "art" strings (`#` lit, `.` unlit), so a
//! typo in a glyph is a build error rather than a misdrawn digit.
//!
//! ```text
//! digit 0 (red):    digit 7 (purple):
//!   # # # # #         # # # # #
//!   # . . . #         . . . . #
//!   # . . . #         . . . # .
//!   # . . . #         . . # . .
//!   # # # # #         . # . . .
//! ```

use crate::led2d::{MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::led_strip::{Rgb, colors};
use crate::{Error, Result};

// ============================================================================
// Digit
// ============================================================================

/// A decimal digit, always in `0..=9`.
///
/// Stepping wraps instead of clamping: [`Digit::next`] of 9 is 0 and
/// [`Digit::previous`] of 0 is 9.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// Number of distinct digits.
    pub const COUNT: u8 = 10;
    /// The digit shown after every cold start.
    pub const ZERO: Self = Self(0);
    /// The largest digit.
    pub const NINE: Self = Self(Self::COUNT - 1);

    /// Create a digit, rejecting values above 9.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] when `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as a plain number.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// One up, wrapping 9 to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// One down, wrapping 0 to 9.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }

    /// The glyph (pattern and color) for this digit.
    #[must_use]
    pub fn glyph(self) -> &'static Glyph {
        &GLYPHS[usize::from(self.0)]
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

// ============================================================================
// Glyph
// ============================================================================

/// A 5×5 lit/unlit pattern plus the color of its lit cells.
///
/// Rows run top to bottom and columns left to right, in logical (screen) coordinates.
/// Use [`crate::led2d::physical_index`] to find where a cell lands on the strip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    rows: [[bool; MATRIX_WIDTH]; MATRIX_HEIGHT],
    color: Rgb,
}

impl Glyph {
    /// Build a glyph from row art: `#` is lit, `.` is unlit, one string per row.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) on a row of the wrong length or an
    /// unexpected character.
    #[must_use]
    pub const fn from_art(art: [&str; MATRIX_HEIGHT], color: Rgb) -> Self {
        let mut rows = [[false; MATRIX_WIDTH]; MATRIX_HEIGHT];
        let mut y_index = 0;
        while y_index < MATRIX_HEIGHT {
            let row = art[y_index].as_bytes();
            assert!(row.len() == MATRIX_WIDTH, "glyph rows must be 5 cells wide");
            let mut x_index = 0;
            while x_index < MATRIX_WIDTH {
                rows[y_index][x_index] = match row[x_index] {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("glyph cells must be '#' or '.'"),
                };
                x_index += 1;
            }
            y_index += 1;
        }
        Self { rows, color }
    }

    /// Color used for every lit cell.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Whether the cell at column `x_index`, row `y_index` is lit.
    #[must_use]
    pub const fn is_lit(&self, x_index: usize, y_index: usize) -> bool {
        self.rows[y_index][x_index]
    }

    /// The pattern, row-major (`rows()[y][x]`).
    #[must_use]
    pub const fn rows(&self) -> &[[bool; MATRIX_WIDTH]; MATRIX_HEIGHT] {
        &self.rows
    }

    /// Iterate over the `(x, y)` coordinates of lit cells, row by row.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y_index, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &lit)| lit)
                .map(move |(x_index, _)| (x_index, y_index))
        })
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.lit_cells().count()
    }
}

/// Glyph table indexed by digit value. Look entries up with [`Digit::glyph`].
#[rustfmt::skip]
pub static GLYPHS: [Glyph; Digit::COUNT as usize] = [
    Glyph::from_art(["#####", "#...#", "#...#", "#...#", "#####"], colors::RED),
    Glyph::from_art(["..##.", ".###.", "..##.", "..##.", ".####"], colors::LIME),
    Glyph::from_art(["#####", "....#", "#####", "#....", "#####"], colors::BLUE),
    Glyph::from_art(["#####", "....#", ".####", "....#", "#####"], colors::YELLOW),
    Glyph::from_art(["#..##", "#..##", "#####", "...##", "...##"], colors::MAGENTA),
    Glyph::from_art(["#####", "#....", "#####", "....#", "#####"], colors::CYAN),
    Glyph::from_art(["#####", "#....", "#####", "#...#", "#####"], colors::ORANGE),
    Glyph::from_art(["#####", "....#", "...#.", "..#..", ".#..."], colors::PURPLE),
    Glyph::from_art(["#####", "#...#", "#####", "#...#", "#####"], colors::TEAL),
    Glyph::from_art(["#####", "#...#", "#####", "....#", "#####"], colors::WHITE),
];
