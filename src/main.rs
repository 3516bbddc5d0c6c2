//! FFT latency benchmark CLI
//! Runs the fixed experiment matrix and prints one line per experiment

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only report lines
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();
    let reports = fft_bench::run_default(&mut stdout.lock())?;

    info!("completed {} experiments", reports.len());
    Ok(())
}
