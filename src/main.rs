use std::io::Read;

use clap::{Parser, Subcommand};

use moodlog::client::{DEFAULT_BASE_URL, JournalClient};
use moodlog::render;
use moodlog::types::ApiError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read entry text from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "moodlog", about = "Journal analysis API client")]
struct Cli {
    #[arg(long, env = "MOODLOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze text without saving it
    Analyze {
        /// Entry text, or - for stdin (default when omitted)
        text: Option<String>,
    },
    /// Analyze text and save it as a new entry
    Add {
        /// Entry text, or - for stdin (default when omitted)
        text: Option<String>,
    },
    /// Show the three most recent entries
    Last,
    /// Show every saved entry
    All,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = JournalClient::new(&cli.base_url)?;

    match cli.command {
        Command::Analyze { text } => {
            let text = resolve_text(text)?;
            let tags = client.analyze(&text).await?;
            println!("{}", render::tag_block(&tags));
        }
        Command::Add { text } => {
            let text = resolve_text(text)?;
            let saved = client.add(&text).await?;
            println!("Saved entry with tags:");
            println!("{}", render::tag_block(&saved.tags));
        }
        Command::Last => {
            let entries = client.last().await?;
            println!("{}", render::entry_list(render::LAST_ENTRIES_TITLE, &entries));
        }
        Command::All => {
            let entries = client.all().await?;
            println!("{}", render::entry_list(render::ALL_ENTRIES_TITLE, &entries));
        }
    }

    Ok(())
}

// Positional text, or stdin when omitted or "-". Blank input is rejected
// by the client before any request goes out.
fn resolve_text(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
