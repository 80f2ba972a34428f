#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Args, Parser, Subcommand};
use incinote_translate::Provider;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, ExtractStrategy, GenerateInput, GenerateStrategy, InfoStrategy, InitStrategy,
    InputSource, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "incinote")]
#[command(about = "Turn an incident description into French ticket notes", long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Read the incident description from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Incident description given inline
    #[arg(short, long)]
    text: Option<String>,
}

impl From<InputArgs> for InputSource {
    fn from(args: InputArgs) -> Self {
        match (args.input, args.text) {
            (Some(path), _) => Self::File(path),
            (None, Some(text)) => Self::Text(text),
            (None, None) => Self::Stdin,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate title, description, work notes and customer comment
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Run the notes through the configured translator
        #[arg(long)]
        translate: bool,

        /// Override the translator from the config file
        #[arg(short, long)]
        provider: Option<Provider>,

        /// Print the export record as JSON
        #[arg(long)]
        json: bool,

        /// Also write the export record to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show the fields extracted from a description
    Extract {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            input,
            translate,
            provider,
            json,
            out,
        } => {
            GenerateStrategy
                .execute(GenerateInput {
                    source: input.into(),
                    translate,
                    provider,
                    json,
                    out,
                })
                .await
        }
        Commands::Extract { input } => ExtractStrategy.execute(input.into()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
