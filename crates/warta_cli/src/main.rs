use std::process;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use warta_core::{Category, CompletionModel, DigestStore, LinkNotifier, Result};
use warta_drive::DrivePublisher;
use warta_feeds::{default_feeds, Collector, Verifier};
use warta_inference::{Analyst, GroqModel};
use warta_notify::DiscordNotifier;

mod pipeline;

use pipeline::Pipeline;

#[derive(Parser)]
#[command(author, version, about = "Daily AI news digest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect, verify, analyze, publish and announce today's digest
    Run {
        /// Digest date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the configured news feeds
    Sources,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            info!("🚀 Digest run starting for {}", date);

            let outcome = match build_pipeline() {
                Ok(pipeline) => pipeline.run(date).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(url) => info!("🎉 Digest published: {}", url),
                Err(e) => {
                    error!("💥 Digest run failed: {}", e);
                    process::exit(1);
                }
            }
        }
        Commands::Sources => list_sources(),
    }
}

fn build_pipeline() -> Result<Pipeline> {
    let model: Arc<dyn CompletionModel> = Arc::new(GroqModel::from_env()?);
    info!("🧠 Completion model ready ({})", model.name());

    let store: Arc<dyn DigestStore> = Arc::new(DrivePublisher::from_env()?);
    let notifier: Arc<dyn LinkNotifier> = Arc::new(DiscordNotifier::from_env()?);

    Ok(Pipeline::new(
        Collector::from_env(),
        Verifier::new(),
        Analyst::new(model),
        store,
        notifier,
    ))
}

fn list_sources() {
    println!("National:");
    for feed in default_feeds()
        .iter()
        .filter(|f| f.category == Category::National)
    {
        println!("  - {} ({})", feed.name, feed.url);
    }
    println!("International:");
    for feed in default_feeds()
        .iter()
        .filter(|f| f.category == Category::International)
    {
        println!("  - {} ({})", feed.name, feed.url);
    }
}
