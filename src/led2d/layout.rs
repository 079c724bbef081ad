//! Compile-time description of how a rectangular LED panel is wired.
//!
//! See [`LedLayout`].

/// Maps each LED in strip-wiring order to its `(x, y)` cell on a `W`×`H` panel.
///
/// Coordinates are screen-style: `(0, 0)` is the top-left corner, `x` grows to the right and
/// `y` grows downward. Layouts are checked when built: every coordinate must be in bounds and
/// every cell must appear exactly once. Build them in a `const` and a bad wiring table fails
/// the build.
///
/// Start from [`serpentine_row_major`](Self::serpentine_row_major) (or list the wiring by hand
/// with [`new`](Self::new)), then [`rotate_cw`](Self::rotate_cw) or
/// [`rotate_180`](Self::rotate_180) to match how the panel is mounted.
///
/// # Example
///
/// ```rust,no_run
/// use digit_matrix::led2d::layout::LedLayout;
///
/// // Strip enters at the bottom-right corner of a 3×2 serpentine panel.
/// const MOUNTED: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]);
/// const _: () = assert!(MOUNTED.equals(&EXPECTED));
/// ```
///
/// ```text
/// Serpentine 3×2, before and after rotate_180:
///
///   LED0  LED1  LED2       LED3  LED4  LED5
///   LED5  LED4  LED3       LED2  LED1  LED0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Build a layout from an explicit wiring table: entry `i` is the `(x, y)` of LED `i`.
    ///
    /// # Panics
    ///
    /// Panics (a build error in `const` context) if `W * H != N`, a coordinate is out of
    /// bounds, or a cell is listed twice.
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = map[led_index];
            let (x_index, y_index) = (x_index as usize, y_index as usize);
            assert!(x_index < W, "column out of bounds");
            assert!(y_index < H, "row out of bounds");

            let cell = y_index * W + x_index;
            assert!(!seen[cell], "duplicate (x, y) in layout");
            seen[cell] = true;
            led_index += 1;
        }
        // N distinct in-bounds cells on an N-cell panel cover every cell.

        Self { map }
    }

    /// Rows wired left-to-right, then right-to-left, alternating, starting at the top-left.
    ///
    /// ```text
    /// 3×2:
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `W * H != N` or a side is longer than `u16::MAX`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "both sides are checked to fit in u16"
    )]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(W <= u16::MAX as usize && H <= u16::MAX as usize, "sides must fit in u16");

        let mut map = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                map[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(map)
    }

    /// Rotate the panel a quarter turn clockwise. Width and height swap.
    ///
    /// # Panics
    ///
    /// Panics if the rotated table fails the checks in [`new`](Self::new), which a valid
    /// layout never does.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the new column is below H, which an existing row index already fits in"
    )]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        let mut map = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            map[led_index] = ((H - 1 - y_index as usize) as u16, x_index);
            led_index += 1;
        }
        LedLayout::<N, H, W>::new(map)
    }

    /// Rotate the panel half a turn.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }

    /// The wiring table: entry `i` is the `(x, y)` of LED `i`.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// The inverse table, row-major: entry `y * W + x` is the strip index of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `N` does not fit in `u16`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "N is checked to fit in u16")]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(N <= u16::MAX as usize, "LED count must fit in u16");

        let mut inverse = [0_u16; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            inverse[y_index as usize * W + x_index as usize] = led_index as u16;
            led_index += 1;
        }
        inverse
    }

    /// Const equality, for compile-time assertions.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            let (other_x, other_y) = other.map[led_index];
            if x_index != other_x || y_index != other_y {
                return false;
            }
            led_index += 1;
        }
        true
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Number of LEDs.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; a layout has at least one LED.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
