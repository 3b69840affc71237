mod audit;
mod merge;
mod pipeline;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "juicedex-cli")]
#[command(about = "JuiceDex price aggregation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fold a raw per-site snapshot into the merged product catalog.
    Merge {
        /// Raw snapshot JSON file (per-site listing dump).
        #[arg(long)]
        snapshot: PathBuf,
        /// Where to write the merged catalog JSON.
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the merge, then report duplicate candidates and broken names.
    Audit {
        /// Raw snapshot JSON file (per-site listing dump).
        #[arg(long)]
        snapshot: PathBuf,
        /// Where to write the audit report JSON.
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = juicedex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Merge { snapshot, out }) => merge::run_merge(&config, &snapshot, &out),
        Some(Commands::Audit { snapshot, out }) => audit::run_audit(&config, &snapshot, &out),
        None => {
            println!("juicedex-cli: use the `merge` or `audit` subcommand");
            Ok(())
        }
    }
}
