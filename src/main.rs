/*!
 * Command-line interface for dirextract
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dirextract::config::{Args, Config};
use dirextract::error::{ExtractError, Result};
use dirextract::extractor::Extractor;
use dirextract::report::{Reporter, RunSummary};
use dirextract::utils::count_files;
use dirextract::writer::{write_to_stdout, ReportWriter};

fn main() -> ExitCode {
    init_logging();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "dirextract", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(Config::from_args(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirextract=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(config: Config) -> Result<()> {
    // Fail on a bad root before anything is drawn
    config.validate()?;

    let progress = create_progress_bar();
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Pre-pass so the bar tracks files processed against files discovered
    let total_files = count_files(&config.target_dir, config.include_hidden);
    progress.set_length(total_files);
    progress.set_prefix("📊 Extracting");

    let extractor = Extractor::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let extraction = extractor.run();
    progress.finish_and_clear();
    let extraction = extraction?;

    let writer = ReportWriter::new(config.clone());
    match writer.write(&extraction.text) {
        Ok(()) => {}
        Err(e @ ExtractError::OutputWrite { .. }) => {
            // The report is still in memory; show it rather than lose it
            warn!(error = %e, "falling back to stdout");
            eprintln!("Error: {}", e);
            return write_to_stdout(&extraction.text);
        }
        Err(e) => return Err(e),
    }

    if let Some(output_file) = config.output_file {
        let summary = RunSummary {
            output_file,
            duration: start_time.elapsed(),
            finished_at: Local::now(),
            statistics: extraction.statistics,
        };
        Reporter.print(&summary);
    }

    Ok(())
}

fn create_progress_bar() -> ProgressBar {
    let progress = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress.set_prefix("📊 Setup");
    // Ticks from a background thread, so the spinner keeps moving while
    // the extraction blocks this one
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
