use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod dataset;
mod map;
mod query;
mod score;

#[derive(Debug, Parser)]
#[command(name = "palate-cli")]
#[command(about = "Dish flavor match scoring and edibility checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a CSV dataset and write it back with edibility and match_score columns
    Score {
        /// Input CSV with at least `flavors` and `user_flavor` columns
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },
    /// Look up one dish interactively and score a typed flavor description
    Query {
        /// CSV with `dish_name` and `flavors` columns
        #[arg(long)]
        dataset: PathBuf,
    },
    /// Derive predicted flavor labels from raw ingredient lists
    Map {
        /// Input CSV with `dish_name` and `ingredients` columns
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path (`dish_name`, `predicted_flavors`)
        #[arg(long)]
        output: PathBuf,
    },
}

/// Build the flavor matcher from application config: rule tagger, thesaurus
/// snapshot (JSON file or built-in lexicon), embedding-backed scorer.
fn build_matcher(config: &palate_core::AppConfig) -> anyhow::Result<palate_engine::FlavorMatcher> {
    let thesaurus: Box<dyn palate_engine::Thesaurus + Send + Sync> =
        match &config.synonyms_path {
            Some(path) => Box::new(palate_engine::LexiconThesaurus::from_json_file(path)?),
            None => Box::new(palate_engine::LexiconThesaurus::builtin()),
        };
    let embed = palate_engine::EmbedClient::new(&config.embed_url, config.embed_timeout_secs)?;
    Ok(palate_engine::FlavorMatcher::new(
        Box::new(palate_engine::RuleTagger::new()),
        thesaurus,
        palate_engine::SimilarityScorer::new(embed),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PALATE_LOG_LEVEL")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score { input, output } => {
            let config = palate_core::load_app_config_from_env()?;
            let matcher = build_matcher(&config)?;
            score::run_score(&matcher, &input, &output).await
        }
        Commands::Query { dataset } => {
            let config = palate_core::load_app_config_from_env()?;
            let matcher = build_matcher(&config)?;
            query::run_query(&matcher, &dataset).await
        }
        Commands::Map { input, output } => map::run_map(&input, &output),
    }
}
