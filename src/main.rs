//! Cricket Sim - Entry Point
//!
//! Loads a match configuration (or the built-in India vs Australia
//! fixture), plays one match and prints the commentary or a JSON record.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cricket_sim::commentary::{Commentary, CommentarySink, Commentator, NullSink, StdoutSink};
use cricket_sim::core::{MatchConfig, Result};
use cricket_sim::simulation::simulate;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Limited-overs cricket match simulator
#[derive(Parser, Debug)]
#[command(name = "cricket-sim")]
#[command(about = "Simulate a limited-overs cricket match ball by ball")]
struct Args {
    /// Match configuration file (TOML). Defaults to the built-in fixture.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of overs per innings
    #[arg(long)]
    overs: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip ball-by-ball commentary and print only the summary
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cricket_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading match configuration from {:?}", path);
            MatchConfig::load_from_file(path)?
        }
        None => MatchConfig::default(),
    };

    if let Some(overs) = args.overs {
        config = config.with_overs(overs);
        config.validate()?;
    }

    let seed = match args.seed.or(config.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            tracing::warn!("No seed configured; using random seed {}", seed);
            seed
        }
    };
    tracing::info!(
        "{} vs {}, {} overs, seed {}",
        config.home.name,
        config.away.name,
        config.total_overs,
        seed
    );

    let mut stdout = StdoutSink;
    let mut silent = NullSink;
    let sink: &mut dyn CommentarySink = if args.quiet || args.format == OutputFormat::Json {
        &mut silent
    } else {
        &mut stdout
    };
    let mut commentary = Commentary::new(&Commentator, sink);

    let output = simulate(&config, seed, &mut commentary)?;

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Text => {
            println!();
            println!("=== RESULT ===");
            println!("{}", output.summary());
        }
    }
    Ok(())
}
