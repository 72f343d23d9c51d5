// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reading acquisition.
//!
//! One [`Reading`] is one pass over every Sense HAT channel. Scalars are
//! rounded to the configured precision; raw vectors pass through untouched.

use crate::error::AcquisitionError;
use crate::sensor::{SensorReader, Vector3};
use serde::Serialize;

/// Number of numeric values carried by a [`Reading`].
pub const FIELD_COUNT: usize = 14;

/// Fractional digits of the smallest subnormal double (2^-1074). Every
/// double is an exact decimal at this many places.
const EXACT_DECIMALS: u32 = 1074;

/// A complete set of sensor outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub temperature_h: f64,
    pub temperature_p: f64,
    pub magnetometer: Vector3,
    pub gyroscope: Vector3,
    pub accelerometer: Vector3,
}

impl Reading {
    /// Flattened `(field name, value)` pairs in storage order.
    pub fn fields(&self) -> [(&'static str, f64); FIELD_COUNT] {
        [
            ("temperature", self.temperature),
            ("pressure", self.pressure),
            ("humidity", self.humidity),
            ("temperature_h", self.temperature_h),
            ("temperature_p", self.temperature_p),
            ("magnetometer_x", self.magnetometer.x),
            ("magnetometer_y", self.magnetometer.y),
            ("magnetometer_z", self.magnetometer.z),
            ("gyroscope_x", self.gyroscope.x),
            ("gyroscope_y", self.gyroscope.y),
            ("gyroscope_z", self.gyroscope.z),
            ("accelerometer_x", self.accelerometer.x),
            ("accelerometer_y", self.accelerometer.y),
            ("accelerometer_z", self.accelerometer.z),
        ]
    }
}

/// Read every channel once and build a [`Reading`].
///
/// The first failing getter aborts the whole acquisition; no partial
/// reading is ever returned.
pub fn acquire<S>(sensor: &mut S, precision: u32) -> Result<Reading, AcquisitionError>
where
    S: SensorReader + ?Sized,
{
    let temperature = round_to_precision(sensor.temperature()?, precision);
    let pressure = round_to_precision(sensor.pressure()?, precision);
    let humidity = round_to_precision(sensor.humidity()?, precision);
    let temperature_h = round_to_precision(sensor.temperature_from_humidity()?, precision);
    let temperature_p = round_to_precision(sensor.temperature_from_pressure()?, precision);
    tracing::debug!(
        temperature,
        pressure,
        humidity,
        temperature_h,
        temperature_p,
        precision,
        "Environmental channels read"
    );

    let magnetometer = sensor.compass_raw()?;
    let gyroscope = sensor.gyroscope_raw()?;
    let accelerometer = sensor.accelerometer_raw()?;
    tracing::debug!(
        magnetometer = ?magnetometer,
        gyroscope = ?gyroscope,
        accelerometer = ?accelerometer,
        "Motion channels read"
    );

    Ok(Reading {
        temperature,
        pressure,
        humidity,
        temperature_h,
        temperature_p,
        magnetometer,
        gyroscope,
        accelerometer,
    })
}

/// Round `value` to `precision` decimal places.
///
/// Rounds the exact binary value (2.675 is stored just below the midpoint and
/// becomes 2.67) and returns the double nearest to the resulting decimal, so
/// rounding an already rounded value is a no-op. Non-finite values, and any
/// precision past the exact decimal expansion of a double, return `value`
/// unchanged.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || precision >= EXACT_DECIMALS {
        return value;
    }
    let decimals = precision as usize;
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
