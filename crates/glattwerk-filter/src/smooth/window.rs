// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sliding-window smoothing filters (mean and median) over a replicate-padded
// grid. Each output cell depends only on its own window, and the output keeps
// the input's shape.

use std::fmt;

use glattwerk_core::error::{GlattwerkError, Result, filter_radius};
use glattwerk_core::Grid;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::padding::pad;

/// The window reductions Glattwerk knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Arithmetic mean (uniform box kernel).
    Mean,
    /// Statistical median.
    Median,
}

impl FilterKind {
    /// Both kinds, in the order the pipeline runs them.
    pub const ALL: [FilterKind; 2] = [FilterKind::Mean, FilterKind::Median];

    /// Lowercase name used in file names and reports.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Mean => "mean",
            FilterKind::Median => "median",
        }
    }

    /// Run this filter over `grid`.
    pub fn apply(self, grid: &Grid, filter_size: usize) -> Result<Grid> {
        match self {
            FilterKind::Mean => mean_filter(grid, filter_size),
            FilterKind::Median => median_filter(grid, filter_size),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smooth `grid` with a `filter_size` x `filter_size` mean filter.
///
/// Equivalent to convolving the replicate-padded grid with a kernel whose
/// entries are all `1 / filter_size²`. Output values are left unquantized, so
/// a constant grid comes back exactly only for integer intensities; other
/// constants can pick up rounding error in the last bits.
#[instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn mean_filter(grid: &Grid, filter_size: usize) -> Result<Grid> {
    let area = window_area(filter_size)? as f64;
    reduce_windows(grid, filter_size, |window| {
        window.iter().sum::<f64>() / area
    })
}

/// Smooth `grid` with a `filter_size` x `filter_size` median filter.
#[instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn median_filter(grid: &Grid, filter_size: usize) -> Result<Grid> {
    reduce_windows(grid, filter_size, median)
}

/// Median of `values`, reordering them in place.
///
/// An even count yields the mean of the two middle values. Returns NaN for an
/// empty slice.
pub fn median(values: &mut [f64]) -> f64 {
    let len = values.len();
    if len == 0 {
        return f64::NAN;
    }

    let mid = len / 2;
    let (lower, upper, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
    let upper = *upper;
    if len % 2 == 1 {
        return upper;
    }

    // The lower half holds everything ranked below `mid`; its maximum is the
    // other middle value.
    let lower = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lower + upper) / 2.0
}

/// Number of cells in a `filter_size` x `filter_size` window.
///
/// Fails with `InvalidFilterSize` for sizes `filter_radius` rejects and for
/// sizes whose square does not fit in a `usize`.
fn window_area(filter_size: usize) -> Result<usize> {
    filter_radius(filter_size)?;
    filter_size
        .checked_mul(filter_size)
        .ok_or(GlattwerkError::InvalidFilterSize(filter_size))
}

/// Pad `grid`, then reduce the window centred on every source pixel.
///
/// The window is gathered row by row into a reused scratch buffer before it is
/// handed to `reduce`.
fn reduce_windows(
    grid: &Grid,
    filter_size: usize,
    mut reduce: impl FnMut(&mut [f64]) -> f64,
) -> Result<Grid> {
    let p = filter_radius(filter_size)?;
    let area = window_area(filter_size)?;
    let (height, width) = grid.shape();
    if grid.is_empty() {
        return Ok(Grid::new(height, width));
    }

    let padded = pad(grid, filter_size)?;
    let mut output = Grid::new(height, width);
    let mut window = Vec::with_capacity(area);

    for row in 0..height {
        for col in 0..width {
            window.clear();
            // Padded (row + p, col + p) is the centre, so the window starts at
            // padded (row, col).
            for padded_row in row..row + filter_size {
                window.extend_from_slice(&padded.row(padded_row)[col..col + filter_size]);
            }
            output[(row, col)] = reduce(window.as_mut_slice());
        }
    }

    debug!(radius = p, "Window reduction complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(height: usize, width: usize) -> Grid {
        Grid::from_fn(height, width, |r, c| ((r * 31 + c * 17) % 256) as f64)
    }

    fn single_outlier() -> Grid {
        let mut grid = Grid::new(5, 5);
        grid[(2, 2)] = 255.0;
        grid
    }

    #[test]
    fn filters_preserve_shape() {
        for (height, width) in [(1, 1), (4, 7), (9, 3)] {
            let grid = ramp(height, width);
            for size in [1, 3, 5, 7] {
                for kind in FilterKind::ALL {
                    let out = kind.apply(&grid, size).unwrap();
                    assert_eq!(out.shape(), grid.shape(), "{kind} size {size}");
                }
            }
        }
    }

    #[test]
    fn size_one_returns_input() {
        let grid = ramp(6, 5);
        assert_eq!(mean_filter(&grid, 1).unwrap(), grid);
        assert_eq!(median_filter(&grid, 1).unwrap(), grid);
    }

    fn assert_all_close(actual: &Grid, expected: f64, tolerance: f64) {
        for &value in actual.as_slice() {
            assert!((value - expected).abs() <= tolerance, "{value} vs {expected}");
        }
    }

    #[test]
    fn constant_grid_is_invariant() {
        let grid = Grid::filled(6, 4, 137.0);
        for size in [1, 3, 5, 9] {
            assert_eq!(mean_filter(&grid, size).unwrap(), grid, "mean size {size}");
            assert_eq!(median_filter(&grid, size).unwrap(), grid, "median size {size}");
        }
    }

    /// Summing a non-integer constant rounds, so the mean only holds it to
    /// within floating-point error. The median selects, so it stays exact.
    #[test]
    fn non_integer_constant_is_invariant_within_tolerance() {
        for value in [0.1, 100.3, 254.9] {
            let grid = Grid::filled(5, 7, value);
            for size in [3, 5, 9] {
                let mean = mean_filter(&grid, size).unwrap();
                assert_eq!(mean.shape(), grid.shape());
                assert_all_close(&mean, value, 1e-9);
                assert_eq!(median_filter(&grid, size).unwrap(), grid, "median size {size}");
            }
        }
    }

    /// An isolated spike: the median removes it, the mean only spreads it out.
    #[test]
    fn median_suppresses_outlier_and_mean_attenuates_it() {
        let grid = single_outlier();

        let median = median_filter(&grid, 3).unwrap();
        assert_eq!(median, Grid::new(5, 5));

        let mean = mean_filter(&grid, 3).unwrap();
        let centre = mean[(2, 2)];
        assert!(centre > 0.0 && centre < 255.0, "centre was {centre}");
        assert!((centre - 255.0 / 9.0).abs() < 1e-9);
        // Every neighbour of the spike sees it once.
        assert!((mean[(1, 1)] - 255.0 / 9.0).abs() < 1e-9);
        // Cells two steps away do not.
        assert_eq!(mean[(0, 0)], 0.0);
    }

    #[test]
    fn mean_uses_replicated_border() {
        let grid = Grid::from_rows(&[[0.0, 9.0], [0.0, 9.0]]).unwrap();
        let out = mean_filter(&grid, 3).unwrap();
        // Left column window: two columns of 0 and one of 9.
        assert!((out[(0, 0)] - 3.0).abs() < 1e-12);
        // Right column window: one column of 0 and two of 9.
        assert!((out[(0, 1)] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn median_picks_middle_of_window() {
        let grid = Grid::from_rows(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
        .unwrap();
        let out = median_filter(&grid, 3).unwrap();
        assert_eq!(out[(1, 1)], 5.0);
        // Top-left window after padding: 1 1 2 / 1 1 2 / 4 4 5.
        assert_eq!(out[(0, 0)], 2.0);
    }

    #[test]
    fn median_helper_handles_even_counts() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&mut [7.0]), 7.0);
        assert!(median(&mut []).is_nan());
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let grid = ramp(3, 3);
        for kind in FilterKind::ALL {
            assert!(matches!(
                kind.apply(&grid, 4),
                Err(GlattwerkError::InvalidFilterSize(4))
            ));
            assert!(matches!(
                kind.apply(&grid, 0),
                Err(GlattwerkError::InvalidFilterSize(0))
            ));
        }
    }

    /// A window whose cell count overflows is an invalid size, not a panic.
    #[test]
    fn overflowing_window_is_rejected() {
        let grid = ramp(3, 3);
        for kind in FilterKind::ALL {
            assert!(matches!(
                kind.apply(&grid, usize::MAX),
                Err(GlattwerkError::InvalidFilterSize(usize::MAX))
            ));
        }
    }

    #[test]
    fn empty_grid_yields_empty_output() {
        let grid = Grid::new(0, 3);
        assert_eq!(mean_filter(&grid, 3).unwrap().shape(), (0, 3));
        assert_eq!(median_filter(&grid, 5).unwrap().shape(), (0, 3));
        // The size is still validated.
        assert!(mean_filter(&grid, 2).is_err());
    }

    #[test]
    fn window_larger_than_grid_still_works() {
        let grid = Grid::from_rows(&[[10.0, 20.0]]).unwrap();
        let out = median_filter(&grid, 7).unwrap();
        // Window is 7x7 over a 1x2 source: 28 cells of 10 and 21 of 20 at col 0.
        assert_eq!(out[(0, 0)], 10.0);
        assert_eq!(out[(0, 1)], 20.0);
    }
}
