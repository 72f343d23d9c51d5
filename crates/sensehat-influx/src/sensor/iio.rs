// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sense HAT access through the Linux IIO sysfs interface.
//!
//! With the `rpi-sense` overlay loaded the kernel binds the HAT's sensors to
//! IIO drivers and exposes one `iio:deviceN` directory per sensor:
//!
//! ```text
//! /sys/bus/iio/devices/iio:device0/name         -> "hts221"
//!                              .../in_temp_raw
//!                              .../in_temp_offset
//!                              .../in_temp_scale
//! ```
//!
//! A channel value is `(raw + offset) * scale` in IIO base units, or the
//! `_input` attribute when the driver already provides a processed value.
//! Values are then converted into Sense HAT units.

use super::{SensorReader, Vector3};
use crate::error::AcquisitionError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where the kernel enumerates IIO devices.
pub const DEFAULT_IIO_ROOT: &str = "/sys/bus/iio/devices";

const HUMIDITY_DEVICE: &str = "hts221";
const PRESSURE_DEVICE: &str = "lps25h";
const MAGNETOMETER_DEVICE: &str = "lsm9ds1_magn";
const GYROSCOPE_DEVICE: &str = "lsm9ds1_gyro";
const ACCELEROMETER_DEVICE: &str = "lsm9ds1_accel";

/// m/s² per g.
const STANDARD_GRAVITY: f64 = 9.806_65;
/// µT per gauss.
const MICROTESLA_PER_GAUSS: f64 = 100.0;
/// mbar per kPa.
const MBAR_PER_KPA: f64 = 10.0;

/// The five Sense HAT sensors, resolved to their sysfs directories.
#[derive(Debug, Clone)]
pub struct IioSenseHat {
    humidity: PathBuf,
    pressure: PathBuf,
    magnetometer: PathBuf,
    gyroscope: PathBuf,
    accelerometer: PathBuf,
}

impl IioSenseHat {
    /// Locate every Sense HAT device under `root`.
    ///
    /// Fails with [`AcquisitionError::DeviceNotFound`] if any sensor is
    /// missing, so no reading is attempted against a partial HAT.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, AcquisitionError> {
        let root = root.as_ref();
        let devices = scan_devices(root)?;

        let find = |name: &str| {
            devices
                .iter()
                .find(|(device_name, _)| device_name == name)
                .map(|(_, path)| path.clone())
                .ok_or_else(|| AcquisitionError::DeviceNotFound {
                    name: name.to_string(),
                    root: root.to_path_buf(),
                })
        };

        let hat = Self {
            humidity: find(HUMIDITY_DEVICE)?,
            pressure: find(PRESSURE_DEVICE)?,
            magnetometer: find(MAGNETOMETER_DEVICE)?,
            gyroscope: find(GYROSCOPE_DEVICE)?,
            accelerometer: find(ACCELEROMETER_DEVICE)?,
        };

        tracing::debug!(
            humidity = %hat.humidity.display(),
            pressure = %hat.pressure.display(),
            magnetometer = %hat.magnetometer.display(),
            gyroscope = %hat.gyroscope.display(),
            accelerometer = %hat.accelerometer.display(),
            "Sense HAT devices resolved"
        );

        Ok(hat)
    }
}

impl SensorReader for IioSenseHat {
    fn temperature(&mut self) -> Result<f64, AcquisitionError> {
        // The Sense HAT reports the humidity sensor's temperature by default.
        self.temperature_from_humidity()
    }

    fn pressure(&mut self) -> Result<f64, AcquisitionError> {
        Ok(read_channel(&self.pressure, "pressure", None)? * MBAR_PER_KPA)
    }

    fn humidity(&mut self) -> Result<f64, AcquisitionError> {
        // milli-percent
        Ok(read_channel(&self.humidity, "humidityrelative", None)? / 1000.0)
    }

    fn temperature_from_humidity(&mut self) -> Result<f64, AcquisitionError> {
        // milli-degrees Celsius
        Ok(read_channel(&self.humidity, "temp", None)? / 1000.0)
    }

    fn temperature_from_pressure(&mut self) -> Result<f64, AcquisitionError> {
        Ok(read_channel(&self.pressure, "temp", None)? / 1000.0)
    }

    fn compass_raw(&mut self) -> Result<Vector3, AcquisitionError> {
        read_vector(&self.magnetometer, "magn", MICROTESLA_PER_GAUSS)
    }

    fn gyroscope_raw(&mut self) -> Result<Vector3, AcquisitionError> {
        read_vector(&self.gyroscope, "anglvel", 1.0)
    }

    fn accelerometer_raw(&mut self) -> Result<Vector3, AcquisitionError> {
        read_vector(&self.accelerometer, "accel", 1.0 / STANDARD_GRAVITY)
    }
}

/// List `(name, directory)` for every `iio:device*` entry under `root`.
fn scan_devices(root: &Path) -> Result<Vec<(String, PathBuf)>, AcquisitionError> {
    let entries = fs::read_dir(root).map_err(|source| AcquisitionError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut devices = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AcquisitionError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_device = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with("iio:device"));
        if !is_device {
            continue;
        }

        // Triggers and half-bound devices may lack a name; skip them.
        match fs::read_to_string(path.join("name")) {
            Ok(name) => devices.push((name.trim().to_string(), path)),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "Skipping unnamed IIO entry"),
        }
    }

    devices.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(devices)
}

fn read_vector(dir: &Path, kind: &str, factor: f64) -> Result<Vector3, AcquisitionError> {
    Ok(Vector3 {
        x: read_channel(dir, kind, Some('x'))? * factor,
        y: read_channel(dir, kind, Some('y'))? * factor,
        z: read_channel(dir, kind, Some('z'))? * factor,
    })
}

/// Read one channel in IIO base units.
///
/// Axis channels fall back to the attributes shared by type
/// (`in_magn_scale` for `in_magn_x`).
fn read_channel(dir: &Path, kind: &str, axis: Option<char>) -> Result<f64, AcquisitionError> {
    let shared = format!("in_{kind}");
    let prefix = match axis {
        Some(axis) => format!("{shared}_{axis}"),
        None => shared.clone(),
    };

    if let Some(value) = read_optional(&dir.join(format!("{prefix}_input")))? {
        return Ok(value);
    }

    let raw = read_number(&dir.join(format!("{prefix}_raw")))?;
    let offset = match read_optional(&dir.join(format!("{prefix}_offset")))? {
        Some(offset) => offset,
        None => read_optional(&dir.join(format!("{shared}_offset")))?.unwrap_or(0.0),
    };
    let scale = match read_optional(&dir.join(format!("{prefix}_scale")))? {
        Some(scale) => scale,
        None => read_optional(&dir.join(format!("{shared}_scale")))?.unwrap_or(1.0),
    };

    Ok((raw + offset) * scale)
}

fn read_optional(path: &Path) -> Result<Option<f64>, AcquisitionError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_number(path, &content).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AcquisitionError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_number(path: &Path) -> Result<f64, AcquisitionError> {
    let content = fs::read_to_string(path).map_err(|source| AcquisitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_number(path, &content)
}

fn parse_number(path: &Path, content: &str) -> Result<f64, AcquisitionError> {
    let trimmed = content.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| AcquisitionError::Parse {
            path: path.to_path_buf(),
            value: trimmed.to_string(),
        })
}
