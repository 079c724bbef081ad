#![allow(missing_docs)]
//! Host-level tests for the matrix wiring and the layout primitives behind it.

use digit_matrix::led2d::{
    LED_COUNT, MATRIX_HEIGHT, MATRIX_LAYOUT, MATRIX_WIDTH, layout::LedLayout, physical_index,
};

#[test]
fn physical_index_is_a_permutation_of_the_strip() {
    let mut seen = [false; LED_COUNT];
    for y_index in 0..MATRIX_HEIGHT {
        for x_index in 0..MATRIX_WIDTH {
            let led_index = physical_index(x_index, y_index);
            assert!(led_index < LED_COUNT, "({x_index}, {y_index}) -> {led_index}");
            assert!(!seen[led_index], "strip index {led_index} used twice");
            seen[led_index] = true;
        }
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn physical_index_matches_known_cells() {
    // Top row runs right-to-left from the far end of the strip.
    assert_eq!(physical_index(0, 0), 24);
    assert_eq!(physical_index(4, 0), 20);
    // Odd rows run left-to-right.
    assert_eq!(physical_index(0, 1), 15);
    assert_eq!(physical_index(4, 1), 19);
    assert_eq!(physical_index(2, 2), 12);
    assert_eq!(physical_index(0, 3), 5);
    // The strip starts at the bottom-right corner.
    assert_eq!(physical_index(0, 4), 4);
    assert_eq!(physical_index(4, 4), 0);
}

#[test]
fn physical_index_follows_serpentine_rows() {
    for y_index in 0..MATRIX_HEIGHT {
        for x_index in 0..MATRIX_WIDTH {
            let expected = if y_index % 2 == 0 {
                24 - (y_index * 5 + x_index)
            } else {
                24 - (y_index * 5 + (4 - x_index))
            };
            assert_eq!(physical_index(x_index, y_index), expected);
        }
    }
}

#[test]
fn physical_index_agrees_with_matrix_layout() {
    for (led_index, &(x_index, y_index)) in MATRIX_LAYOUT.index_to_xy().iter().enumerate() {
        assert_eq!(
            physical_index(usize::from(x_index), usize::from(y_index)),
            led_index
        );
    }
}

#[test]
fn xy_to_index_inverts_index_to_xy() {
    let inverse = MATRIX_LAYOUT.xy_to_index();
    for (led_index, &(x_index, y_index)) in MATRIX_LAYOUT.index_to_xy().iter().enumerate() {
        let cell = usize::from(y_index) * MATRIX_WIDTH + usize::from(x_index);
        assert_eq!(usize::from(inverse[cell]), led_index);
    }
}

#[test]
fn matrix_layout_dimensions() {
    assert_eq!(MATRIX_LAYOUT.width(), 5);
    assert_eq!(MATRIX_LAYOUT.height(), 5);
    assert_eq!(MATRIX_LAYOUT.len(), 25);
    assert!(!MATRIX_LAYOUT.is_empty());
}

#[test]
fn serpentine_row_major_3x2_matches_expected() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        *SERPENTINE.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn rotate_small_grid() {
    const MAP: LedLayout<6, 3, 2> =
        LedLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    let rotated = MAP.rotate_cw();
    assert_eq!(
        *rotated.index_to_xy(),
        [(1, 0), (1, 1), (1, 2), (0, 0), (0, 1), (0, 2)]
    );

    let half_turn = MAP.rotate_180();
    assert_eq!(
        *half_turn.index_to_xy(),
        [(2, 1), (1, 1), (0, 1), (2, 0), (1, 0), (0, 0)]
    );
}

#[test]
fn rotate_180_twice_is_identity() {
    const SERPENTINE: LedLayout<25, 5, 5> = LedLayout::serpentine_row_major();
    assert!(SERPENTINE.rotate_180().rotate_180().equals(&SERPENTINE));
    assert!(!SERPENTINE.rotate_180().equals(&SERPENTINE));
}

#[test]
#[should_panic(expected = "duplicate (x, y) in layout")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_panics_on_out_of_bounds_column() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn serpentine_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::serpentine_row_major();
}

#[test]
#[should_panic(expected = "cell outside the matrix")]
fn physical_index_panics_outside_the_matrix() {
    let _ = physical_index(MATRIX_WIDTH, 0);
}

#[test]
fn rotated_layout_inverts_back_to_strip_order() {
    const TALL: LedLayout<6, 2, 3> = LedLayout::<6, 3, 2>::serpentine_row_major().rotate_cw();
    let xy_to_index = TALL.xy_to_index();
    for (led_index, &(x_index, y_index)) in TALL.index_to_xy().iter().enumerate() {
        let cell = usize::from(y_index) * TALL.width() + usize::from(x_index);
        assert_eq!(usize::from(xy_to_index[cell]), led_index);
    }
}
