use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mealprep::api::{self, SearchContext};
use mealprep::builder;
use mealprep::config::CONFIG;
use mealprep::corpus::Corpus;
use mealprep::fetcher;
use mealprep::generator;
use mealprep::ranker::Ranker;

#[derive(Parser)]
#[command(name = "mealprep", about = "Pantry-driven recipe search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the search API over HTTP
    Serve,
    /// Generate a synthetic recipe corpus
    Generate {
        /// Number of recipes to generate
        #[arg(long, default_value_t = 250)]
        count: u32,
        /// Output path for the corpus JSON
        #[arg(long, default_value = "data/recipes.json")]
        out: String,
        /// RNG seed for reproducible corpora
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Download raw public recipe datasets
    Fetch {
        /// Directory for the raw downloads
        #[arg(long, default_value = "data")]
        out_dir: String,
    },
    /// Build the corpus from fetched raw datasets, filling with synthetic recipes
    Build {
        /// Directory holding the raw downloads
        #[arg(long, default_value = "data")]
        raw_dir: String,
        /// Output path for the corpus JSON
        #[arg(long, default_value = "data/recipes.json")]
        out: String,
        /// Total corpus size after synthetic fill
        #[arg(long, default_value_t = builder::DEFAULT_TARGET_COUNT)]
        target: u32,
        /// RNG seed for the synthetic fill
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => serve().await?,
        Command::Generate { count, out, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let recipes = generator::generate_recipes(count, &mut rng);
            generator::write_corpus(&out, &recipes)?;
        }
        Command::Fetch { out_dir } => {
            fetcher::fetch_raw_datasets(&out_dir).await?;
        }
        Command::Build {
            raw_dir,
            out,
            target,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let recipes = builder::build_corpus(&raw_dir, target, &mut rng);
            generator::write_corpus(&out, &recipes)?;
        }
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let corpus = Corpus::init_global()?;

    let ctx = Arc::new(SearchContext {
        corpus,
        ranker: Ranker::default(),
    });
    let router = api::create_router(ctx);

    let listener = tokio::net::TcpListener::bind(&CONFIG.bind_addr).await?;
    tracing::info!(addr = %CONFIG.bind_addr, "search api listening");
    axum::serve(listener, router).await?;

    Ok(())
}
