use clap::Parser;
use proxydial_checker::{Args, run};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let summary = run(&args)?;

    tracing::info!(
        checked = summary.checked,
        valid = summary.valid,
        output = %args.output_file.display(),
        "check complete"
    );
    Ok(())
}
