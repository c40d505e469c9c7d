// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::row_schedule::{RowClaimer, RowSchedule, WorkerId};

/// Static load balancing: rows are striped across the pool up front.
///
/// Worker `w` claims rows `w, w+N, w+2N, ...` below the row count. The
/// assignment is a pure function of the worker id, so there is no shared
/// cursor and nothing to coordinate at runtime. With more workers than rows
/// the extra claimers start exhausted; those workers simply process nothing.
#[derive(Debug, Clone, Copy)]
pub struct StaticSchedule {
    rows: usize,
    workers: usize,
}

impl StaticSchedule {
    pub fn new(rows: usize, workers: usize) -> Self {
        assert!(workers > 0, "a schedule needs at least one worker");
        Self { rows, workers }
    }
}

impl RowSchedule for StaticSchedule {
    type Claimer = StrideClaimer;

    fn claimer(&self, worker: WorkerId) -> StrideClaimer {
        StrideClaimer {
            next: worker,
            stride: self.workers,
            rows: self.rows,
        }
    }
}

/// Walks one worker's stripe of the matrix.
#[derive(Debug, Clone)]
pub struct StrideClaimer {
    next: usize,
    stride: usize,
    rows: usize,
}

impl RowClaimer for StrideClaimer {
    fn claim_next_row(&mut self) -> Option<usize> {
        if self.next >= self.rows {
            return None;
        }
        let row = self.next;
        self.next += self.stride;
        Some(row)
    }
}
