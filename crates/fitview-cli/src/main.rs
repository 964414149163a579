//! fitview CLI: terminal viewer for FIT ride recordings

use clap::{Parser, Subcommand};
use fitview_core::{format_elapsed, load_ride, RideSummary};
use std::path::{Path, PathBuf};

/// Terminal viewer for FIT ride recordings
#[derive(Parser)]
#[command(name = "fitview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// FIT file to open (same as `fitview view <FILE>`)
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the viewer on a FIT file
    View {
        /// FIT file to open
        file: PathBuf,
    },

    /// Parse a FIT file and print a ride summary
    Info {
        /// FIT file to summarize
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::View { file }) => open_viewer(&file),
        Some(Commands::Info { file, json }) => cmd_info(&file, json),
        None => match cli.file {
            Some(file) => open_viewer(&file),
            None => {
                eprintln!("Usage: fitview <FILE> (see --help)");
                std::process::exit(2);
            }
        },
    }
}

fn open_viewer(file: &Path) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(fitview_tui::run_tui(file)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_info(file: &Path, json: bool) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let records = match rt.block_on(load_ride(file)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let summary = RideSummary::from_records(&records);
    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_summary(file, &summary);
    }
}

fn print_summary(file: &Path, summary: &RideSummary) {
    println!("File:      {}", file.display());
    println!("Records:   {}", summary.records);
    println!("Duration:  {}", format_elapsed(summary.duration_secs));
    println!(
        "Power:     {} avg / {} max (W)",
        fmt_value(summary.avg_power),
        fmt_value(summary.max_power)
    );
    println!(
        "Heart:     {} avg / {} max (bpm)",
        fmt_value(summary.avg_heart_rate),
        fmt_value(summary.max_heart_rate)
    );
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}
