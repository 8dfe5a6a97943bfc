use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use confsched::core::config;
use confsched::tui;

#[derive(Parser)]
#[command(name = "confsched", about = "Terminal conference schedule browser")]
struct Args {
    /// Path to a JSON schedule file (bundled sample schedule when omitted)
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Start destination, e.g. "Speaker List"
    #[arg(long)]
    start: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to confsched.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("confsched.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    // A malformed or unknown --start route is a configuration error:
    // fail before the terminal is taken over, with the parse error shown.
    let resolved = config::resolve(&file_config, args.schedule.as_deref(), args.start.as_deref())?;

    log::info!(
        "confsched starting up (conference: {}, start route: {})",
        resolved.conference_name,
        resolved.start_route
    );

    tui::run(resolved)?;
    Ok(())
}
