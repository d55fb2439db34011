//! Smoke tester for the media API video upload endpoint.
//!
//! Builds a `multipart/form-data` request carrying a synthetic MP4 payload,
//! POSTs it to `/api/videos` on the target host, and prints the full
//! response (pretty JSON when the body allows it). Transport failures are
//! printed with a failure marker; the process exits 0 either way.

pub mod client;
pub mod payload;
pub mod report;

use std::io::Write;

use anyhow::Result;

/// Run one upload exchange against `host` and write the full trace to `out`.
///
/// Any HTTP status counts as success; a transport failure becomes a single
/// `❌` line. The closing footer is written on both paths, so the result is
/// Err only when writing to `out` itself fails.
pub async fn run(host: &str, out: &mut impl Write) -> Result<()> {
    let body = payload::video_body();

    writeln!(out, "=== Video upload smoke test ===")?;
    writeln!(out, "Host: {}", host)?;
    writeln!(out, "Content-Length: {} bytes", body.len())?;
    writeln!(out)?;

    match client::post_video(host, body).await {
        Ok(report) => report.render(out)?,
        Err(err) => writeln!(out, "❌ Error: {:#}", err)?,
    }

    writeln!(out)?;
    writeln!(out, "=== End of test ===")?;
    Ok(())
}

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
