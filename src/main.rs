/// Main entry point for the contact book assistant
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive session on stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use contact_book::AssistantBot;

const DATA_FILE_NAME: &str = "addressbook.json";

/// `~/.contact_book/addressbook.json`, or the platform data dir when there is no home
fn default_data_path(home: Option<PathBuf>, data_dir: Option<PathBuf>) -> Option<PathBuf> {
    home.map(|p| p.join(".contact_book"))
        .or_else(|| data_dir.map(|p| p.join("contact_book")))
        .map(|dir| dir.join(DATA_FILE_NAME))
}

/// Command line arguments for the contact book assistant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the address book file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("contact_book={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the conversation
        .init();

    let data_path = match args.data_file {
        Some(path) => path,
        None => default_data_path(dirs::home_dir(), dirs::data_dir())
            .ok_or("No home or data directory; pass --data-file")?,
    };

    if let Some(parent) = data_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Using address book at: {}", data_path.display());

    // A corrupt or unreadable book stops startup here
    let bot = AssistantBot::new(data_path)?;
    bot.run().await?;

    info!("Contact book assistant shutdown complete");
    Ok(())
}
