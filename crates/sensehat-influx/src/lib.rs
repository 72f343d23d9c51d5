// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sense HAT to InfluxDB
//!
//! Reads every Sense HAT channel once and writes the result as a single
//! point into an InfluxDB 1.x database.
//!
//! This crate provides:
//! - A [`SensorReader`] capability with a Linux IIO implementation
//! - Acquisition with per-channel decimal rounding
//! - Mapping of a reading onto a tagged `sensors` point
//! - InfluxDB Line Protocol encoding
//! - A [`MetricsDatabase`] capability with an HTTP implementation
//!
//! # Overview
//!
//! ```text
//! IioSenseHat --> acquire() --> Reading --> SubmissionRecord --> InfluxClient (POST /write)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sensehat_influx::{run, Config, IioSenseHat, InfluxClient, DEFAULT_IIO_ROOT};
//!
//! let config = Config::for_room("Office");
//! let mut sensor = IioSenseHat::open(DEFAULT_IIO_ROOT)?;
//! let database = InfluxClient::from_config(&config.connection)?;
//! let ack = run(&mut sensor, &database, &config)?;
//! println!("{ack}");
//! # Ok::<(), sensehat_influx::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod line_protocol;
pub mod pipeline;
pub mod reading;
pub mod record;
pub mod sensor;

pub use client::{InfluxClient, MetricsDatabase};
pub use config::{Config, ConnectionConfig};
pub use error::{AcquisitionError, Error, SubmissionError};
pub use line_protocol::LineProtocolWriter;
pub use pipeline::{run, submit};
pub use reading::{acquire, round_to_precision, Reading};
pub use record::SubmissionRecord;
pub use sensor::{IioSenseHat, SensorReader, Vector3, DEFAULT_IIO_ROOT};
