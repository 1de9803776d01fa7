mod core;
mod feedback;
mod providers;
mod tui;

use clap::Parser;
use misbaha::ContentProviderKind;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "misbaha", about = "Digital tasbih for the terminal")]
struct Args {
    /// Where the daily citation and hijri date come from
    #[arg(short, long, value_enum)]
    content_provider: Option<ContentProviderKind>,

    /// Disable audio feedback for this run
    #[arg(long)]
    muted: bool,

    /// Skip the daily citation and hijri date entirely
    #[arg(long)]
    no_content: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to misbaha.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("misbaha.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unreadable ({e}); continuing with defaults");
        Default::default()
    });
    let cli = CliOverrides {
        content_provider: args
            .content_provider
            .map(|kind| kind.as_str().to_string()),
        muted: args.muted,
        no_content: args.no_content,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Misbaha starting up (content provider: {})",
        resolved.content_provider
    );

    tui::run(resolved)
}
