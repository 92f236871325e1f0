mod cli;

use clap::Parser;
use cli::Args;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let dir = match args.dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    tracing::debug!(dir = %dir.display(), "scanning");

    let stdout = std::io::stdout();
    lss::lss(&dir, &mut stdout.lock())?;

    Ok(())
}
