// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::row_schedule::{RowClaimer, RowSchedule, WorkerId};
use std::sync::{Arc, Mutex};

/// Dynamic load balancing: workers pull unclaimed rows from a shared
/// countdown of rows not yet handed out.
///
/// Whichever worker frees up first claims the next row, so uneven row costs
/// even out across the pool. Claim order between workers is unspecified, but
/// the set of rows claimed over a whole run is exactly `0..rows`, each row
/// exactly once.
pub struct DynamicSchedule {
    remaining: Arc<Mutex<usize>>,
}

impl DynamicSchedule {
    pub fn new(rows: usize) -> Self {
        Self {
            remaining: Arc::new(Mutex::new(rows)),
        }
    }
}

impl RowSchedule for DynamicSchedule {
    type Claimer = CursorClaimer;

    fn claimer(&self, _worker: WorkerId) -> CursorClaimer {
        CursorClaimer {
            remaining: Arc::clone(&self.remaining),
        }
    }
}

/// Shares the countdown cursor with every other worker's claimer.
pub struct CursorClaimer {
    remaining: Arc<Mutex<usize>>,
}

impl RowClaimer for CursorClaimer {
    /// Check-and-decrement under the lock. The claimed row is summed outside
    /// it, so workers only serialize on the O(1) claim itself.
    fn claim_next_row(&mut self) -> Option<usize> {
        let mut remaining = self.remaining.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            Some(*remaining)
        } else {
            None
        }
    }
}
