/// Snip - trim an audio file to a 16-bit PCM WAV
use clap::{Parser, Subcommand};
use snip_cli::{
    commands::{self, RangeRequest, TrimRequest},
    FileSink, Session, SnipConfig,
};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "snip")]
#[command(about = "Cut a time range out of an audio file and save it as WAV", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./snip.toml if present)
    #[arg(short, long, global = true, env = "SNIP_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trim a file and write trimmed-<name>.wav
    Trim {
        /// Audio file to trim
        input: PathBuf,
        /// Start time in seconds
        #[arg(short, long)]
        start: Option<f64>,
        /// End time in seconds (defaults to the end of the file)
        #[arg(short, long)]
        end: Option<f64>,
        /// Directory to write into (overrides output.directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },
    /// Print sample rate, channels and duration of a file
    Info {
        /// Audio file to inspect
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = SnipConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let default_filter = if cli.verbose {
        "snip=debug,snip_cli=debug,snip_audio=debug".to_string()
    } else {
        config.logging.filter.clone()
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Trim {
            input,
            start,
            end,
            output_dir,
            force,
        } => {
            let directory = output_dir.unwrap_or_else(|| config.output.directory.clone());
            let mut sink = FileSink::new(directory, force || config.output.overwrite);
            let session = Mutex::new(Session::new());
            let request = TrimRequest {
                input,
                range: RangeRequest::new(start, end),
            };

            let path = commands::trim(&session, request, &mut sink).await?;
            println!("{}", path.display());
        }
        Commands::Info { input } => {
            let info = commands::info(&input).await?;
            println!("File:        {}", input.display());
            println!("Sample rate: {} Hz", info.sample_rate);
            println!("Channels:    {}", info.channels);
            println!("Frames:      {}", info.frames);
            println!("Duration:    {:.3} s", info.duration_secs);
        }
    }

    Ok(())
}
