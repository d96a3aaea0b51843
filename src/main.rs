use clap::Parser;
use puzzle_stats::{
    args::Args, dataset::load_puzzles, env::load_env, model::aggregate, report::write_report, Error
};
use std::{io, process};
use tracing::{debug, error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() {
    // Must run before parsing so env-backed arguments can come from .env
    let env_file = load_env();
    let args = Args::parse();

    // Log lines go through the indicatif writer so they print above the progress bar.
    // Only the fmt layer is filtered, the progress span is shown at any log level.
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(EnvFilter::new(&args.log_level))
        )
        .with(indicatif_layer)
        .init();

    if let Some(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let puzzles = load_puzzles(&args.input, args.quiet)?;
    let report = aggregate(&puzzles);

    info!("Writing report for {} rating bands", report.bands.len());
    write_report(&mut io::stdout().lock(), &report, args.format)?;

    Ok(())
}
