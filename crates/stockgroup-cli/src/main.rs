mod summary;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stockgroup_core::{AggregateResult, LAPTOP_CATEGORY};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stockgroup-cli")]
#[command(about = "Group spreadsheet inventory into product families")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the full grouping as JSON.
    Group {
        file: PathBuf,
        /// Sub-category text rows must contain.
        #[arg(long, env = "STOCKGROUP_CATEGORY", default_value = LAPTOP_CATEGORY)]
        category: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Print one tab-separated line per product group.
    Summary {
        file: PathBuf,
        /// Sub-category text rows must contain.
        #[arg(long, env = "STOCKGROUP_CATEGORY", default_value = LAPTOP_CATEGORY)]
        category: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Group {
            file,
            category,
            pretty,
        } => {
            let result = group_file(&file, &category)?;
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
        Commands::Summary { file, category } => {
            let result = group_file(&file, &category)?;
            for line in summary::summary_lines(&result) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn group_file(path: &std::path::Path, category: &str) -> anyhow::Result<AggregateResult> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records = stockgroup_sheet::decode_spreadsheet(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(stockgroup_core::process(records, category))
}
