// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::dynamic_schedule::DynamicSchedule;
use crate::partial_result::PartialResultTable;
use crate::progress::ProgressLog;
use crate::row_schedule::RowSchedule;
use crate::static_schedule::StaticSchedule;
use crate::work_matrix::WorkMatrix;
use crate::worker::RowWorker;
use std::sync::Arc;
use std::thread;

/// Which work-distribution discipline a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Balancing {
    #[default]
    Static,
    Dynamic,
}

/// Everything a completed run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Worker count actually used, after clamping.
    pub workers: usize,
    pub total_rows_processed: usize,
    pub gross_sum: u64,
    pub partials: PartialResultTable,
}

/// Orchestrates one reduction: spawn the pool, join it, fold the partials.
pub struct ReductionDriver {
    workers: usize,
    balancing: Balancing,
}

impl ReductionDriver {
    /// Requested worker counts above the hardware parallelism ceiling are
    /// silently clamped to it; 0 is invalid and also clamps to the ceiling.
    pub fn new(requested_workers: usize, balancing: Balancing) -> Self {
        let ceiling = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let workers = if requested_workers == 0 {
            ceiling
        } else {
            requested_workers.min(ceiling)
        };
        Self { workers, balancing }
    }

    /// The clamped worker count the run will use.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    pub fn balancing(&self) -> Balancing {
        self.balancing
    }

    /// Run the full reduction over the matrix and fold the partial results.
    pub async fn run(&self, matrix: Arc<WorkMatrix>) -> RunOutcome {
        match self.balancing {
            Balancing::Static => {
                let schedule = StaticSchedule::new(matrix.rows(), self.workers);
                self.run_with(matrix, schedule).await
            }
            Balancing::Dynamic => {
                let schedule = DynamicSchedule::new(matrix.rows());
                self.run_with(matrix, schedule).await
            }
        }
    }

    async fn run_with<S: RowSchedule>(&self, matrix: Arc<WorkMatrix>, schedule: S) -> RunOutcome {
        let (senders, log) = ProgressLog::channel(self.workers);
        let log_task = tokio::spawn(log.run());

        let workers: Vec<RowWorker> = senders
            .into_iter()
            .enumerate()
            .map(|(id, progress)| {
                RowWorker::spawn(id, Arc::clone(&matrix), schedule.claimer(id), progress)
            })
            .collect();

        // The driver only reads the table after every worker has been
        // joined, so the slots need no locking.
        let mut partials = PartialResultTable::new(self.workers);
        for worker in workers {
            let id = worker.id();
            match worker.wait().await {
                Ok(result) => partials.record(id, result),
                Err(e) => eprintln!("Worker {} task failed: {}", id, e),
            }
        }

        // Every sender is gone once the pool is joined; the log drains and
        // exits on its own.
        if let Err(e) = log_task.await {
            eprintln!("Progress log task failed: {}", e);
        }

        RunOutcome {
            workers: self.workers,
            total_rows_processed: partials.total_rows_processed(),
            gross_sum: partials.gross_sum(),
            partials,
        }
    }
}
