// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapping of a [`Reading`] onto an InfluxDB point.
//!
//! Serializes to the JSON point shape understood by InfluxDB 1.x clients:
//!
//! ```json
//! {
//!   "measurement": "sensors",
//!   "tags": { "house": "My House", "room": "Office" },
//!   "fields": { "temperature": 24.05, "...": 0.0 }
//! }
//! ```

use crate::line_protocol::LineProtocolWriter;
use crate::reading::Reading;
use serde::Serialize;
use std::collections::BTreeMap;

/// Measurement (series) name every reading is stored under.
pub const MEASUREMENT: &str = "sensors";

/// One tagged point ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub measurement: String,
    pub tags: BTreeMap<String, String>,
    pub fields: BTreeMap<String, f64>,
}

impl SubmissionRecord {
    /// Tag `reading` with its room and house.
    pub fn new(reading: &Reading, room: &str, house: &str) -> Self {
        let tags = BTreeMap::from([
            ("room".to_string(), room.to_string()),
            ("house".to_string(), house.to_string()),
        ]);
        let fields = reading
            .fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Self {
            measurement: MEASUREMENT.to_string(),
            tags,
            fields,
        }
    }

    /// Append this record to `writer`.
    pub fn write_line(&self, writer: &mut LineProtocolWriter) {
        let tags: Vec<(&str, &str)> = self
            .tags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let fields: Vec<(&str, f64)> = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();

        writer.write_point(&self.measurement, &tags, &fields);
    }

    /// Render as a single Line Protocol line.
    pub fn to_line_protocol(&self) -> String {
        let mut writer = LineProtocolWriter::new();
        self.write_line(&mut writer);
        writer.into_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::FIELD_COUNT;
    use crate::sensor::Vector3;

    fn reading(scale: f64) -> Reading {
        Reading {
            temperature: 21.5 * scale,
            pressure: 1013.25 * scale,
            humidity: 40.0 * scale,
            temperature_h: 21.5 * scale,
            temperature_p: 20.75 * scale,
            magnetometer: Vector3::new(1.0, 2.0, 3.0),
            gyroscope: Vector3::new(0.5, 0.25, 0.125),
            accelerometer: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn test_record_shape() {
        let record = SubmissionRecord::new(&reading(1.0), "Office", "My House");

        assert_eq!(record.measurement, "sensors");
        assert_eq!(record.tags["room"], "Office");
        assert_eq!(record.tags["house"], "My House");
        assert_eq!(record.fields["temperature"], 21.5);
        assert_eq!(record.fields["temperature_p"], 20.75);
        assert_eq!(record.fields["gyroscope_z"], 0.125);
        assert_eq!(record.fields["accelerometer_z"], 1.0);
    }

    #[test]
    fn test_counts_independent_of_magnitude() {
        for scale in [0.0, 1e-300, -1.0, 1e300] {
            let record = SubmissionRecord::new(&reading(scale), "r", "h");
            assert_eq!(record.fields.len(), FIELD_COUNT);
            assert_eq!(record.tags.len(), 2);
        }
    }

    #[test]
    fn test_json_shape() {
        let record = SubmissionRecord::new(&reading(1.0), "Office", "My House");
        let json = serde_json::to_value(&record).expect("serialize");

        assert_eq!(json["measurement"], "sensors");
        assert_eq!(json["tags"]["room"], "Office");
        assert_eq!(json["fields"]["pressure"], 1013.25);
        assert_eq!(json["fields"].as_object().map(|f| f.len()), Some(FIELD_COUNT));
    }

    #[test]
    fn test_line_protocol() {
        let record = SubmissionRecord::new(&reading(1.0), "Living Room", "My House");

        assert_eq!(
            record.to_line_protocol(),
            "sensors,house=My\\ House,room=Living\\ Room \
             accelerometer_x=0,accelerometer_y=0,accelerometer_z=1,\
             gyroscope_x=0.5,gyroscope_y=0.25,gyroscope_z=0.125,\
             humidity=40,\
             magnetometer_x=1,magnetometer_y=2,magnetometer_z=3,\
             pressure=1013.25,\
             temperature=21.5,temperature_h=21.5,temperature_p=20.75"
        );
    }

    #[test]
    fn test_multiline_room_is_one_point() {
        let record = SubmissionRecord::new(&reading(1.0), "Living\nRoom", "My House");
        let line = record.to_line_protocol();

        assert_eq!(line.lines().count(), 1);
        assert!(line.starts_with("sensors,house=My\\ House,room=Living\\nRoom accelerometer_x=0,"));
    }
}
