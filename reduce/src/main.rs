// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use row_reduce_core::config::Config;
use row_reduce_core::driver::ReductionDriver;
use row_reduce_core::work_matrix::WorkMatrix;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "row-reduce", about = "Sum a work matrix with a pool of concurrent workers")]
struct Args {
    /// Use dynamic load balancing instead of static row striping.
    #[arg(short = 'd')]
    dynamic: bool,

    /// Requested worker count (clamped to the hardware parallelism ceiling).
    #[arg(short = 't')]
    workers: Option<usize>,

    /// Path to a JSON run configuration.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let start_time = Instant::now();
    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                process::exit(2);
            }
        },
        None => Config::default(),
    };

    if args.dynamic {
        config.dynamic_balancing = true;
    }
    if let Some(workers) = args.workers {
        config.num_workers = workers;
    }

    let parallelism = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    println!("{} concurrent workers supported", parallelism);

    let matrix = Arc::new(WorkMatrix::from_seed(config.rows, config.cols, config.seed));
    let driver = ReductionDriver::new(config.num_workers, config.balancing());

    println!(
        "Summing {}x{} matrix with {} workers ({:?} balancing)",
        matrix.rows(),
        matrix.cols(),
        driver.worker_count(),
        driver.balancing()
    );

    let outcome = driver.run(matrix).await;

    println!(
        "Reduction finished: total_rows_processed={} gross_sum={}",
        outcome.total_rows_processed, outcome.gross_sum
    );
    println!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());
}
