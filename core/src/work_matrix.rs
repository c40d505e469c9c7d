// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two-dimensional grid of values the reduction sums.
///
/// Populated once from a seeded generator, so equal seeds give equal
/// matrices across runs, then shared read-only with every worker.
pub struct WorkMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl WorkMatrix {
    /// Build a `rows` x `cols` matrix filled from a deterministic PRNG.
    pub fn from_seed(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..rows * cols).map(|_| rng.random()).collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`. Schedulers are trusted to stay in range;
    /// an out-of-range index is a caller bug and panics.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(col < self.cols, "column {} out of range", col);
        self.cells[row * self.cols + col]
    }

    /// Sum of one row, widened to u64.
    pub fn row_sum(&self, row: usize) -> u64 {
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .map(|&cell| u64::from(cell))
            .sum()
    }

    /// Serial sum of every element, the reference a concurrent run must match.
    pub fn total_sum(&self) -> u64 {
        self.cells.iter().map(|&cell| u64::from(cell)).sum()
    }
}
