// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::driver::Balancing;
use serde::{Deserialize, Serialize};
use std::fs;

/// Run configuration, loadable from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rows in the work matrix.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Columns in the work matrix.
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Seed for the deterministic matrix fill.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Requested worker count; the driver clamps it to the hardware ceiling.
    #[serde(default = "default_workers")]
    pub num_workers: usize,
    /// Use dynamic load balancing instead of static striping.
    #[serde(default)]
    pub dynamic_balancing: bool,
}

fn default_rows() -> usize {
    1000
}

fn default_cols() -> usize {
    100
}

fn default_seed() -> u64 {
    0x1234
}

fn default_workers() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            seed: default_seed(),
            num_workers: default_workers(),
            dynamic_balancing: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn balancing(&self) -> Balancing {
        if self.dynamic_balancing {
            Balancing::Dynamic
        } else {
            Balancing::Static
        }
    }
}
