use crate::analysis::Analysis;
use crate::loader::LoadError;
use crate::report::Layout;
use crate::route::Route;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod analysis;
mod loader;
mod report;
mod route;
mod ticket;
mod time;

#[derive(Parser)]
#[command(about = "Flight time and price statistics for VVO -> TLV tickets")]
struct Args {
    /// Path to the JSON tickets file
    #[arg(short, long, value_name = "FILE", default_value = "tickets.json")]
    tickets: PathBuf,

    /// Show per-carrier flight times as a table
    #[arg(long)]
    table: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<String, LoadError> {
    info!(path = %args.tickets.display(), "loading tickets");
    let tickets = loader::load_from_file(&args.tickets)?;

    let analysis = Analysis::run(Route::VVO_TLV, &tickets);
    debug!(
        matched = analysis.matched,
        carriers = analysis.min_durations.len(),
        "analysis complete"
    );

    let layout = if args.table { Layout::Table } else { Layout::Plain };
    Ok(report::render(&analysis, layout))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "load failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
