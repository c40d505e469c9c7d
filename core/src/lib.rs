// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod config;
pub mod driver;
pub mod dynamic_schedule;
pub mod partial_result;
pub mod progress;
pub mod row_schedule;
pub mod static_schedule;
pub mod work_matrix;
pub mod worker;
