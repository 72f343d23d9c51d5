// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sensor capability.
//!
//! [`SensorReader`] is the seam between the acquisition stage and the
//! hardware. The binary plugs in [`IioSenseHat`]; tests plug in fixed
//! doubles.
//!
//! Units follow the Sense HAT conventions:
//!
//! | Channel | Unit |
//! |---|---|
//! | temperature | °C |
//! | pressure | millibar (hPa) |
//! | humidity | % relative humidity |
//! | compass | µT |
//! | gyroscope | rad/s |
//! | accelerometer | g |

mod iio;

pub use iio::{IioSenseHat, DEFAULT_IIO_ROOT};

use crate::error::AcquisitionError;
use serde::Serialize;

/// Raw 3-axis sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Read access to the Sense HAT channels.
///
/// Every getter performs one device read. Implementations return values
/// unrounded and in the units listed in the module docs.
pub trait SensorReader {
    /// Ambient temperature.
    fn temperature(&mut self) -> Result<f64, AcquisitionError>;

    /// Barometric pressure.
    fn pressure(&mut self) -> Result<f64, AcquisitionError>;

    /// Relative humidity.
    fn humidity(&mut self) -> Result<f64, AcquisitionError>;

    /// Temperature measured by the humidity sensor.
    fn temperature_from_humidity(&mut self) -> Result<f64, AcquisitionError>;

    /// Temperature measured by the pressure sensor.
    fn temperature_from_pressure(&mut self) -> Result<f64, AcquisitionError>;

    /// Raw magnetometer sample.
    fn compass_raw(&mut self) -> Result<Vector3, AcquisitionError>;

    /// Raw gyroscope sample.
    fn gyroscope_raw(&mut self) -> Result<Vector3, AcquisitionError>;

    /// Raw accelerometer sample.
    fn accelerometer_raw(&mut self) -> Result<Vector3, AcquisitionError>;
}
