mod cmd_extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skald", version, about = "Turn meeting transcripts into action items")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract action items from a transcript
    Extract {
        /// Transcript file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Skip the model pass and run the deterministic rules only
        #[arg(long)]
        rules_only: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract {
            file,
            rules_only,
            pretty,
        } => cmd_extract::execute(file.as_deref(), rules_only, pretty),
    }
}
