// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::row_schedule::WorkerId;

/// What one worker accumulated over the rows it processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerResult {
    pub rows_processed: usize,
    pub partial_sum: u64,
}

/// Per-worker accumulator slots, indexed by worker id.
///
/// Slots start zeroed when the pool is spawned and are written exactly once
/// by the driver as each worker is joined. Once every worker has finished,
/// the `rows_processed` column sums to the matrix row count whatever the
/// balancing discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialResultTable {
    slots: Vec<WorkerResult>,
}

impl PartialResultTable {
    pub fn new(workers: usize) -> Self {
        Self {
            slots: vec![WorkerResult::default(); workers],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, worker: WorkerId) -> WorkerResult {
        self.slots[worker]
    }

    pub fn record(&mut self, worker: WorkerId, result: WorkerResult) {
        self.slots[worker] = result;
    }

    pub fn iter(&self) -> impl Iterator<Item = (WorkerId, WorkerResult)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    pub fn total_rows_processed(&self) -> usize {
        self.slots.iter().map(|slot| slot.rows_processed).sum()
    }

    pub fn gross_sum(&self) -> u64 {
        self.slots.iter().map(|slot| slot.partial_sum).sum()
    }
}
