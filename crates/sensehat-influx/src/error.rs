// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the acquisition and submission stages.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading from the sensor capability.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// No IIO device with the expected name was found.
    #[error("Sensor device '{name}' not found under {}", .root.display())]
    DeviceNotFound { name: String, root: PathBuf },

    /// A sysfs attribute could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sysfs attribute did not contain a number.
    #[error("Invalid value {value:?} in {}", .path.display())]
    Parse { path: PathBuf, value: String },

    /// The sensor refused or failed a read of the given channel.
    #[error("Failed to read {channel}: {reason}")]
    Read {
        channel: &'static str,
        reason: String,
    },
}

/// Failure while writing a reading to the metrics database.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Host/port did not form a valid endpoint URL.
    #[error("Invalid database endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// HTTP client construction or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Write rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// A database implementation reported a failure of its own.
    #[error("Write failed: {0}")]
    Backend(String),
}

/// Any failure of a single acquire-and-submit run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),
}
