// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Run configuration: database connection plus record labelling.
//!
//! Built once at startup from the command line and borrowed, never mutated,
//! by the acquisition and submission stages.

use serde::Serialize;

/// Default InfluxDB host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default InfluxDB HTTP API port.
pub const DEFAULT_PORT: u16 = 8086;
/// Default InfluxDB user.
pub const DEFAULT_USER: &str = "admin";
/// Default InfluxDB password.
pub const DEFAULT_PASSWORD: &str = "password";
/// Default target database.
pub const DEFAULT_DATABASE: &str = "sensorhat";
/// Default `house` tag.
pub const DEFAULT_HOUSE: &str = "My House";
/// Default number of decimals kept on scalar readings.
pub const DEFAULT_PRECISION: u32 = 2;

/// InfluxDB 1.x connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    /// Hostname or IP of the InfluxDB server.
    pub host: String,
    /// Port of the InfluxDB HTTP API.
    pub port: u16,
    /// User for HTTP basic auth.
    pub user: String,
    /// Password for HTTP basic auth.
    #[serde(skip_serializing)]
    pub password: String,
    /// Database receiving the point.
    pub database: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// Complete configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Database connection.
    pub connection: ConnectionConfig,
    /// `room` tag value.
    pub room: String,
    /// `house` tag value.
    pub house: String,
    /// Decimals kept on scalar readings.
    pub precision: u32,
}

impl Config {
    /// Configuration for `room` with every other setting at its default.
    pub fn for_room(room: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            room: room.into(),
            house: DEFAULT_HOUSE.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}
