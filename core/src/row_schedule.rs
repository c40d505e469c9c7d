// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Identifies one worker and its slot in the partial-result table.
pub type WorkerId = usize;

/// A work-distribution discipline for the rows of the matrix.
///
/// The schedule is held by the driver; a worker only ever sees the claimer
/// issued to it at spawn time.
pub trait RowSchedule {
    type Claimer: RowClaimer;

    /// Issue the exclusive row claimer for one worker.
    fn claimer(&self, worker: WorkerId) -> Self::Claimer;
}

/// Per-worker capability to claim rows, one at a time.
pub trait RowClaimer: Send + 'static {
    /// The next row this worker should sum, or `None` once its share is
    /// exhausted.
    fn claim_next_row(&mut self) -> Option<usize>;
}
