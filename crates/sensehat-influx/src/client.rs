// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Metrics database capability and its InfluxDB 1.x HTTP implementation.

use crate::config::ConnectionConfig;
use crate::error::SubmissionError;
use crate::line_protocol::LineProtocolWriter;
use crate::record::SubmissionRecord;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

/// Write access to a time-series database.
pub trait MetricsDatabase {
    /// Write `points` in one request.
    ///
    /// Returns the server acknowledgement (`true` once the write is
    /// accepted). Implementations never retry.
    fn write_points(&self, points: &[SubmissionRecord]) -> Result<bool, SubmissionError>;
}

/// InfluxDB 1.x client using the `/write` HTTP endpoint.
#[derive(Debug, Clone)]
pub struct InfluxClient {
    http: Client,
    write_url: Url,
    user: String,
    password: String,
}

impl InfluxClient {
    /// Build a client for `host:port`, authenticating as `user` and writing
    /// into `database`.
    ///
    /// No connection is opened until the first write.
    pub fn new(
        host: &str,
        port: u16,
        user: &str,
        password: &str,
        database: &str,
    ) -> Result<Self, SubmissionError> {
        let write_url = write_url(host, port, database)?;
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            write_url,
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Build a client from a resolved [`ConnectionConfig`].
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, SubmissionError> {
        Self::new(
            &config.host,
            config.port,
            &config.user,
            &config.password,
            &config.database,
        )
    }

    /// Endpoint the client posts to.
    pub fn write_url(&self) -> &Url {
        &self.write_url
    }
}

impl MetricsDatabase for InfluxClient {
    fn write_points(&self, points: &[SubmissionRecord]) -> Result<bool, SubmissionError> {
        let mut writer = LineProtocolWriter::new();
        for point in points {
            point.write_line(&mut writer);
        }
        let body = writer.into_body();

        tracing::debug!(url = %self.write_url, points = points.len(), body = %body, "Posting points");

        let response = self
            .http
            .post(self.write_url.clone())
            .basic_auth(&self.user, Some(&self.password))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(true);
        }

        let body = response.text().unwrap_or_default();
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }
}

/// `http://{host}:{port}/write?db={database}`, bracketing IPv6 literals.
fn write_url(host: &str, port: u16, database: &str) -> Result<Url, SubmissionError> {
    let authority = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    };
    let raw = format!("http://{authority}/write");

    let mut url = Url::parse(&raw).map_err(|e| SubmissionError::InvalidEndpoint {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    url.query_pairs_mut().append_pair("db", database);
    Ok(url)
}
