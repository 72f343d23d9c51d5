// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! InfluxDB Line Protocol encoding.
//!
//! ```text
//! measurement,tag1=val1,tag2=val2 field1=val1,field2=val2
//! ```
//!
//! Points carry no timestamp; the server stamps them on arrival.
//!
//! See: <https://docs.influxdata.com/influxdb/v1/write_protocols/line_protocol_reference/>

/// Accumulates points and joins them into a request body.
#[derive(Debug, Default)]
pub struct LineProtocolWriter {
    buffer: Vec<String>,
}

impl LineProtocolWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Encode one point.
    ///
    /// Tags are sorted by key. Fields keep the given order. `fields` must
    /// not be empty.
    pub fn write_point(&mut self, measurement: &str, tags: &[(&str, &str)], fields: &[(&str, f64)]) {
        debug_assert!(!fields.is_empty(), "InfluxDB requires at least one field");

        let mut line = escape_measurement(measurement);

        let mut sorted_tags: Vec<_> = tags.iter().collect();
        sorted_tags.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted_tags {
            line.push(',');
            line.push_str(&escape_key(key));
            line.push('=');
            line.push_str(&escape_key(value));
        }

        line.push(' ');
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&escape_key(key));
            line.push('=');
            // Shortest round-trip form; no `i` suffix keeps the field a float.
            line.push_str(&value.to_string());
        }

        self.buffer.push(line);
    }

    /// All points, one per line.
    pub fn into_body(self) -> String {
        self.buffer.join("\n")
    }
}

/// Measurement names escape backslashes, newlines, commas and spaces.
fn escape_measurement(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(' ', "\\ ")
}

/// Tag keys, tag values and field keys additionally escape equals signs.
///
/// Backslashes go first so the escapes added afterwards stay intact.
fn escape_key(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}
