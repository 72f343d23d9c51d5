// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The acquire-then-submit run.
//!
//! ```text
//! SensorReader --> acquire() --> Reading --> SubmissionRecord --> MetricsDatabase::write_points
//! ```

use crate::client::MetricsDatabase;
use crate::config::Config;
use crate::error::{Error, SubmissionError};
use crate::reading::{acquire, Reading};
use crate::record::SubmissionRecord;
use crate::sensor::SensorReader;

/// Tag `reading` and write it as a batch of exactly one point.
pub fn submit<D>(database: &D, config: &Config, reading: &Reading) -> Result<bool, SubmissionError>
where
    D: MetricsDatabase + ?Sized,
{
    let record = SubmissionRecord::new(reading, &config.room, &config.house);
    let ack = database.write_points(std::slice::from_ref(&record))?;

    tracing::info!(
        room = %config.room,
        house = %config.house,
        database = %config.connection.database,
        ack,
        "Reading written"
    );

    Ok(ack)
}

/// Acquire one reading from `sensor` and write it to `database`.
///
/// The database is not touched when acquisition fails.
pub fn run<S, D>(sensor: &mut S, database: &D, config: &Config) -> Result<bool, Error>
where
    S: SensorReader + ?Sized,
    D: MetricsDatabase + ?Sized,
{
    let reading = acquire(sensor, config.precision)?;
    Ok(submit(database, config, &reading)?)
}
