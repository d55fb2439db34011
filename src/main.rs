//! upload-smoke — one-shot smoke test for the video upload API.
//!
//! POSTs a synthetic MP4 to `/api/videos` on the target host and prints the
//! response. Exits 0 whether the exchange succeeds or fails.

use clap::Parser;
use upload_smoke::{init_tracing, run};

#[derive(Parser)]
#[command(
    name = "upload-smoke",
    about = "Smoke test the video upload API endpoint"
)]
struct Cli {
    /// Host and port of the API server
    #[arg(long, default_value = "127.0.0.1:8000")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    run(&cli.host, &mut stdout.lock()).await
}
