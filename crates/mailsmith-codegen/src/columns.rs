#![forbid(unsafe_code)]

//! Column width arithmetic for layout blocks.
//!
//! Email clients lay columns out as table cells, and the visual gap
//! between columns is produced with `padding-right` — which is added
//! on top of a cell's declared width, not carved out of it. So the
//! declared width of every column except the last must be its content
//! width *plus* the gap, or the row totals drift and the layout breaks
//! visibly.
//!
//! ```text
//! total = 640, gap = 16, two even columns:
//!
//! |← cell 328 (content 312 + gap 16) →|← cell 312 →|
//! |  content 312   |  pad 16  |      content 312    |
//! ```
//!
//! # Invariants
//!
//! 1. Content widths sum to `total - (n-1)·gap`.
//! 2. Declared cell widths sum to exactly `total`, for every column
//!    count and ratio.
//! 3. Integer remainders go to the last column.

use mailsmith_model::{ColumnCount, ColumnRatio};

/// Default visual gap between columns, in pixels.
pub const COLUMN_GAP: u16 = 16;

/// The widths of one rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidth {
    /// Width of the column's content box.
    pub content: u16,
    /// Width declared on the table cell. Equals `content + gap` for
    /// every column except the last, where it equals `content`.
    pub cell: u16,
}

/// Compute per-column widths for a layout row.
///
/// `total` is the available content width (the document content width
/// minus the block's horizontal padding).
#[must_use]
pub fn column_widths(
    total: u16,
    gap: u16,
    columns: ColumnCount,
    ratio: ColumnRatio,
) -> Vec<ColumnWidth> {
    let n = columns.count();
    if n == 1 {
        return vec![ColumnWidth {
            content: total,
            cell: total,
        }];
    }

    let gaps = gap * (n as u16 - 1);
    let available = total.saturating_sub(gaps);

    let weights: Vec<u16> = match (n, ratio) {
        (2, ColumnRatio::OneTwo) => vec![1, 2],
        (2, ColumnRatio::TwoOne) => vec![2, 1],
        _ => vec![1; n],
    };
    let weight_sum: u16 = weights.iter().sum();

    let mut widths = Vec::with_capacity(n);
    let mut used = 0u16;
    for (index, weight) in weights.iter().enumerate() {
        let content = if index == n - 1 {
            // Last column absorbs the integer remainder.
            available - used
        } else {
            let w = (u32::from(available) * u32::from(*weight) / u32::from(weight_sum)) as u16;
            used += w;
            w
        };
        let cell = if index == n - 1 { content } else { content + gap };
        widths.push(ColumnWidth { content, cell });
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cell_sum(widths: &[ColumnWidth]) -> u16 {
        widths.iter().map(|w| w.cell).sum()
    }

    #[test]
    fn single_column_takes_full_width() {
        let widths = column_widths(640, COLUMN_GAP, ColumnCount::One, ColumnRatio::Even);
        assert_eq!(widths, vec![ColumnWidth { content: 640, cell: 640 }]);
    }

    #[test]
    fn two_even_columns() {
        let widths = column_widths(640, 16, ColumnCount::Two, ColumnRatio::Even);
        assert_eq!(widths[0], ColumnWidth { content: 312, cell: 328 });
        assert_eq!(widths[1], ColumnWidth { content: 312, cell: 312 });
        assert_eq!(cell_sum(&widths), 640);
    }

    #[test]
    fn two_columns_one_two_ratio() {
        let widths = column_widths(640, 16, ColumnCount::Two, ColumnRatio::OneTwo);
        assert_eq!(widths[0].content, 208);
        assert_eq!(widths[1].content, 416);
        assert_eq!(cell_sum(&widths), 640);
    }

    #[test]
    fn two_columns_two_one_ratio() {
        let widths = column_widths(640, 16, ColumnCount::Two, ColumnRatio::TwoOne);
        assert_eq!(widths[0].content, 416);
        assert_eq!(widths[1].content, 208);
        assert_eq!(cell_sum(&widths), 640);
    }

    #[test]
    fn three_columns_split_evenly_with_remainder_last() {
        let widths = column_widths(640, 16, ColumnCount::Three, ColumnRatio::Even);
        // available = 640 - 32 = 608; 608 / 3 = 202 r 2.
        assert_eq!(widths[0].content, 202);
        assert_eq!(widths[1].content, 202);
        assert_eq!(widths[2].content, 204);
        assert_eq!(cell_sum(&widths), 640);
    }

    #[test]
    fn four_columns_sum_exactly() {
        let widths = column_widths(640, 16, ColumnCount::Four, ColumnRatio::Even);
        assert_eq!(widths.len(), 4);
        assert_eq!(cell_sum(&widths), 640);
    }

    #[test]
    fn ratio_ignored_above_two_columns() {
        let even = column_widths(640, 16, ColumnCount::Three, ColumnRatio::Even);
        let ratioed = column_widths(640, 16, ColumnCount::Three, ColumnRatio::TwoOne);
        assert_eq!(even, ratioed);
    }

    #[test]
    fn gap_folded_into_all_but_last_cell() {
        let widths = column_widths(640, 16, ColumnCount::Four, ColumnRatio::Even);
        for w in &widths[..3] {
            assert_eq!(w.cell, w.content + 16);
        }
        assert_eq!(widths[3].cell, widths[3].content);
    }

    proptest! {
        /// Declared cell widths sum to the total for every supported
        /// shape and a range of gaps.
        #[test]
        fn cell_widths_always_sum_to_total(
            total in 300u16..1000,
            gap in 0u16..40,
            n in 1u8..=4,
            ratio_pick in 0u8..3,
        ) {
            let columns = ColumnCount::try_from(n).unwrap();
            let ratio = match ratio_pick {
                0 => ColumnRatio::Even,
                1 => ColumnRatio::OneTwo,
                _ => ColumnRatio::TwoOne,
            };

            let widths = column_widths(total, gap, columns, ratio);
            prop_assert_eq!(widths.len(), usize::from(n));
            let sum: u16 = widths.iter().map(|w| w.cell).sum();
            prop_assert_eq!(sum, total);
        }
    }
}
