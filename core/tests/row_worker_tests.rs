// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use row_reduce_core::partial_result::{PartialResultTable, WorkerResult};
use row_reduce_core::progress::{ProgressEvent, ProgressLog};
use row_reduce_core::row_schedule::RowSchedule;
use row_reduce_core::static_schedule::StaticSchedule;
use row_reduce_core::work_matrix::WorkMatrix;
use row_reduce_core::worker::RowWorker;
use std::sync::Arc;

#[tokio::test]
async fn test_four_static_workers_split_thousand_rows() {
    // Arrange: 1000x100 matrix, fixed seed, 4 workers, static striping.
    let matrix = Arc::new(WorkMatrix::from_seed(1000, 100, 0x1234));
    let schedule = StaticSchedule::new(matrix.rows(), 4);
    let (senders, log) = ProgressLog::channel(4);
    let log_task = tokio::spawn(log.run());

    // Act
    let workers: Vec<RowWorker> = senders
        .into_iter()
        .enumerate()
        .map(|(id, progress)| {
            RowWorker::spawn(id, Arc::clone(&matrix), schedule.claimer(id), progress)
        })
        .collect();

    let mut table = PartialResultTable::new(4);
    for worker in workers {
        let id = worker.id();
        table.record(id, worker.wait().await.unwrap());
    }
    log_task.await.unwrap();

    // Assert: every worker sums exactly its stripe.
    for worker in 0..4 {
        let expected: u64 = (worker..1000)
            .step_by(4)
            .map(|row| matrix.row_sum(row))
            .sum();
        assert_eq!(table.get(worker).rows_processed, 250);
        assert_eq!(table.get(worker).partial_sum, expected);
    }
    assert_eq!(table.total_rows_processed(), 1000);
    assert_eq!(table.gross_sum(), matrix.total_sum());
}

#[tokio::test]
async fn test_workers_report_start_and_finish() {
    // Arrange
    let matrix = Arc::new(WorkMatrix::from_seed(10, 3, 1));
    let schedule = StaticSchedule::new(10, 2);
    let (senders, mut log) = ProgressLog::channel(2);

    // Act
    let workers: Vec<RowWorker> = senders
        .into_iter()
        .enumerate()
        .map(|(id, progress)| {
            RowWorker::spawn(id, Arc::clone(&matrix), schedule.claimer(id), progress)
        })
        .collect();

    let mut started = vec![false; 2];
    let mut finished: Vec<Option<WorkerResult>> = vec![None; 2];
    while let Some((worker, event)) = log.next_event().await {
        match event {
            ProgressEvent::Started => started[worker] = true,
            ProgressEvent::Finished(result) => finished[worker] = Some(result),
        }
    }

    // Assert: the reported result matches the one handed back at join.
    for worker in workers {
        let id = worker.id();
        let result = worker.wait().await.unwrap();
        assert_eq!(finished[id], Some(result));
    }
    assert!(started.iter().all(|&s| s));
}

#[tokio::test]
async fn test_worker_with_empty_claimer_reports_zero() {
    // Arrange: worker 5 of 8 has no stripe in a 3-row matrix.
    let matrix = Arc::new(WorkMatrix::from_seed(3, 4, 2));
    let schedule = StaticSchedule::new(3, 8);
    let (senders, log) = ProgressLog::channel(8);
    tokio::spawn(log.run());

    // Act
    let worker = RowWorker::spawn(
        5,
        Arc::clone(&matrix),
        schedule.claimer(5),
        senders.into_iter().nth(5).unwrap(),
    );
    let result = worker.wait().await.unwrap();

    // Assert
    assert_eq!(result, WorkerResult::default());
}
