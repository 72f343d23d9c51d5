// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sense HAT to InfluxDB CLI
//!
//! Take one reading from the Sense HAT and write it to InfluxDB.
//!
//! # Usage
//!
//! ```bash
//! # Write to a local InfluxDB with default credentials
//! sensehat-influx --room Office
//!
//! # Remote server, three decimals
//! sensehat-influx --host influx.lan --database home --room Kitchen --house "Flat 2" --precision 3
//!
//! # Print the point without writing it
//! sensehat-influx --room Office --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use sensehat_influx::config::{
    DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_HOUSE, DEFAULT_PASSWORD, DEFAULT_PORT,
    DEFAULT_PRECISION, DEFAULT_USER,
};
use sensehat_influx::{
    acquire, Config, ConnectionConfig, IioSenseHat, InfluxClient, SubmissionRecord,
    DEFAULT_IIO_ROOT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sensehat-influx")]
#[command(author = "naskel.com")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write one Sense HAT reading to InfluxDB")]
#[command(long_about = None)]
struct Cli {
    /// Hostname/IP of the InfluxDB server
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port of the InfluxDB HTTP API
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// User for the InfluxDB connection
    #[arg(long, default_value = DEFAULT_USER)]
    user: String,

    /// Password for the InfluxDB connection
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Database name to store the data
    #[arg(long, default_value = DEFAULT_DATABASE)]
    database: String,

    /// Name of the house/apartment, stored as the `house` tag
    #[arg(long, default_value = DEFAULT_HOUSE)]
    house: String,

    /// Name of the room, stored as the `room` tag
    #[arg(long)]
    room: String,

    /// Decimal places kept on temperature, pressure and humidity (3 gives 24.054)
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Directory where the kernel lists IIO devices
    #[arg(long, default_value = DEFAULT_IIO_ROOT)]
    iio_root: PathBuf,

    /// Print the point as JSON instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Verbose mode (show internal logs)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            connection: ConnectionConfig {
                host: self.host.clone(),
                port: self.port,
                user: self.user.clone(),
                password: self.password.clone(),
                database: self.database.clone(),
            },
            room: self.room.clone(),
            house: self.house.clone(),
            precision: self.precision,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("sensehat_influx=debug")
    } else {
        EnvFilter::new("sensehat_influx=info")
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    let dump = serde_json::to_string(&config).context("Failed to render configuration")?;
    tracing::debug!(config = %dump, "Configuration resolved");

    let mut sensor = IioSenseHat::open(&cli.iio_root).context("Failed to open Sense HAT")?;

    if cli.dry_run {
        let reading =
            acquire(&mut sensor, config.precision).context("Failed to read Sense HAT")?;
        let points = [SubmissionRecord::new(&reading, &config.room, &config.house)];
        let json = serde_json::to_string_pretty(&points).context("Failed to render point")?;
        println!("{json}");
        return Ok(());
    }

    let database =
        InfluxClient::from_config(&config.connection).context("Failed to create InfluxDB client")?;
    let ack = sensehat_influx::run(&mut sensor, &database, &config)
        .with_context(|| format!("Reading not written to {}", database.write_url()))?;

    println!("{ack}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults_with_room_only() {
        let cli = Cli::try_parse_from(["sensehat-influx", "--room", "Office"]).expect("parse");
        let config = cli.to_config();

        assert_eq!(config, Config::for_room("Office"));
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.port, 8086);
        assert_eq!(config.connection.user, "admin");
        assert_eq!(config.connection.password, "password");
        assert_eq!(config.connection.database, "sensorhat");
        assert_eq!(config.house, "My House");
        assert_eq!(config.precision, 2);
        assert_eq!(cli.iio_root, PathBuf::from("/sys/bus/iio/devices"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_room_is_required() {
        let err = Cli::try_parse_from(["sensehat-influx", "--house", "Flat 2"])
            .expect_err("room missing");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "sensehat-influx",
            "--host",
            "influx.lan",
            "--port",
            "9999",
            "--user",
            "writer",
            "--password",
            "s3cret",
            "--database",
            "home",
            "--house",
            "Flat 2",
            "--room",
            "Bedroom",
            "--precision",
            "3",
            "--iio-root",
            "/tmp/iio",
            "--dry-run",
        ])
        .expect("parse");
        let config = cli.to_config();

        assert_eq!(config.connection.host, "influx.lan");
        assert_eq!(config.connection.port, 9999);
        assert_eq!(config.connection.user, "writer");
        assert_eq!(config.connection.password, "s3cret");
        assert_eq!(config.connection.database, "home");
        assert_eq!(config.house, "Flat 2");
        assert_eq!(config.room, "Bedroom");
        assert_eq!(config.precision, 3);
        assert_eq!(cli.iio_root, PathBuf::from("/tmp/iio"));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let err = Cli::try_parse_from(["sensehat-influx", "--room", "Office", "--port", "http"])
            .expect_err("port not a number");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["sensehat-influx", "--room", "Office", "--precision=-1"])
            .expect_err("negative precision");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_config_dump_hides_password() {
        let cli = Cli::try_parse_from(["sensehat-influx", "--room", "Office", "--password", "s3cret"])
            .expect("parse");
        let dump = serde_json::to_string(&cli.to_config()).expect("serialize");

        assert!(dump.contains("\"room\":\"Office\""));
        assert!(!dump.contains("s3cret"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
