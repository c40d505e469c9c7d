// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::partial_result::WorkerResult;
use crate::progress::{ProgressEvent, ProgressSender};
use crate::row_schedule::{RowClaimer, WorkerId};
use crate::work_matrix::WorkMatrix;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

/// One concurrent unit of the reduction.
///
/// The task is spawned in the constructor and runs to completion: claim a
/// row, add its column sum, repeat until the claimer is exhausted. The
/// accumulated result is the task's output, handed back through `wait`.
pub struct RowWorker {
    id: WorkerId,
    handle: JoinHandle<WorkerResult>,
}

impl RowWorker {
    pub fn spawn<C>(
        id: WorkerId,
        matrix: Arc<WorkMatrix>,
        claimer: C,
        progress: ProgressSender,
    ) -> Self
    where
        C: RowClaimer,
    {
        let handle = tokio::spawn(Self::run_task(matrix, claimer, progress));
        Self { id, handle }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Wait for the worker task to finish and take its result.
    pub async fn wait(self) -> Result<WorkerResult, JoinError> {
        self.handle.await
    }

    async fn run_task<C>(
        matrix: Arc<WorkMatrix>,
        mut claimer: C,
        progress: ProgressSender,
    ) -> WorkerResult
    where
        C: RowClaimer,
    {
        progress.send(ProgressEvent::Started).await;

        let mut result = WorkerResult::default();
        while let Some(row) = claimer.claim_next_row() {
            result.partial_sum += matrix.row_sum(row);
            result.rows_processed += 1;
        }

        progress.send(ProgressEvent::Finished(result)).await;
        result
    }
}
