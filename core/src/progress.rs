// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::partial_result::WorkerResult;
use crate::row_schedule::WorkerId;
use tokio::sync::mpsc::{self, Sender};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{StreamExt, StreamMap};

/// Lifecycle events a worker reports while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Started,
    Finished(WorkerResult),
}

/// Sending half handed to one worker.
///
/// Dropping it (the worker task returning) closes that worker's stream,
/// which is how the log learns the pool has drained.
#[derive(Clone)]
pub struct ProgressSender {
    tx: Sender<ProgressEvent>,
}

impl ProgressSender {
    pub async fn send(&self, event: ProgressEvent) {
        // A dropped log just means nobody is listening.
        let _ = self.tx.send(event).await;
    }
}

/// Single consumer of every worker's progress stream.
///
/// One channel per worker, merged into a `StreamMap` keyed by worker id;
/// only this consumer ever touches the console, so workers never contend
/// on output.
pub struct ProgressLog {
    streams: StreamMap<WorkerId, ReceiverStream<ProgressEvent>>,
}

impl ProgressLog {
    /// Create one sender per worker plus the log that consumes them all.
    pub fn channel(workers: usize) -> (Vec<ProgressSender>, Self) {
        let mut senders = Vec::with_capacity(workers);
        let mut streams = StreamMap::new();

        for worker in 0..workers {
            let (tx, rx) = mpsc::channel::<ProgressEvent>(4);
            senders.push(ProgressSender { tx });
            streams.insert(worker, ReceiverStream::new(rx));
        }

        (senders, Self { streams })
    }

    /// Next event from whichever worker reported first, or `None` once every
    /// sender is gone and the streams are drained.
    pub async fn next_event(&mut self) -> Option<(WorkerId, ProgressEvent)> {
        self.streams.next().await
    }

    /// Drain the pool's events to the console.
    pub async fn run(mut self) {
        while let Some((worker, event)) = self.next_event().await {
            match event {
                ProgressEvent::Started => println!("Worker {} starting", worker),
                ProgressEvent::Finished(result) => println!(
                    "Worker {} ending rows_processed={} partial_sum={}",
                    worker, result.rows_processed, result.partial_sum
                ),
            }
        }
    }
}
