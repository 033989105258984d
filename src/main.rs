use atlas::core::config;
use atlas::core::theme::Theme;
use atlas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", version, about = "Browse the world's countries from the terminal")]
struct Args {
    /// Color theme (overrides ATLAS_THEME and the config file)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        log::error!("Failed to load config: {}", e);
        std::io::Error::other(e)
    })?;
    let resolved = config::resolve(&file_config, args.theme);

    log::info!(
        "Atlas starting up: theme={:?}, countries={}, summaries={}",
        resolved.theme,
        resolved.countries_url,
        resolved.summary_url
    );

    tui::run(resolved)
}
