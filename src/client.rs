//! Request driver: one POST to the upload endpoint, response collected whole.

use anyhow::{Context, Result};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;

use crate::payload::MultipartBody;
use crate::report::UploadReport;

/// Path of the upload endpoint on the target host.
pub const UPLOAD_PATH: &str = "/api/videos";

/// POST the multipart body to `http://{host}/api/videos` and collect the full
/// response. Any HTTP status counts as a completed exchange; only
/// transport-level failures (connect, send, read) return an error.
pub async fn post_video(host: &str, body: MultipartBody) -> Result<UploadReport> {
    // No timeout is configured; a server that never responds keeps this
    // call blocked.
    let client = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let url = format!("http://{}{}", host, UPLOAD_PATH);
    tracing::debug!(%url, content_length = body.len(), "sending upload request");

    let response = client
        .post(&url)
        .header(CONTENT_TYPE, body.content_type())
        .header(CONTENT_LENGTH, body.len())
        .body(body.into_bytes())
        .send()
        .await
        .context("Failed to send request")?;

    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    Ok(UploadReport {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
        headers,
        body,
    })
}
