mod apps;
mod dataset;
mod progress;
mod ranking;
mod render;
mod sentiment;
mod utils;

use {
    std::{io::{IsTerminal, Read}, sync::Arc},
    clap::{Parser, Subcommand},
    tracing::{info, warn},
    invest_sentiment_core::{
        catalog::PlayStoreCatalog,
        config::Config,
        model::ModelHandle,
    },
    crate::{
        apps::apps_panel,
        dataset::dataset_panel,
        progress::ProgressCatalog,
        ranking::ranking_panel,
        sentiment::{sentiment_panel, DEFAULT_INPUT},
        utils::init_logging,
    },
};

#[derive(Parser)]
#[command(name = "invest-sentiment", about = "Sentiment of Indonesian investment app reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify review text, one comment per line
    Analyze {
        #[arg(long)]
        text: Option<String>,
    },
    /// Rank the configured apps by their current store rating
    Ranking,
    /// Summarize the labeled training dataset
    Dataset,
    /// List the configured apps
    Apps,
    /// Every panel in order
    Dashboard {
        #[arg(long)]
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load();
    let model = Arc::new(ModelHandle::new(config.model.clone()));

    info!("invest sentiment dashboard");
    if config.text.uses_builtin_dictionary_only() {
        warn!("no [text] root_words_path configured, stemming with the built-in root word list only");
    }

    match cli.command.unwrap_or(Commands::Dashboard { text: None }) {
        Commands::Analyze { text } => {
            print!("{}", run_sentiment(&config, model, read_input(text)?).await?);
        },
        Commands::Ranking => {
            print!("{}", run_ranking(&config).await);
        },
        Commands::Dataset => {
            print!("{}", dataset_panel(&config.dataset));
        },
        Commands::Apps => {
            print!("{}", apps_panel(&config.catalog().apps()));
        },
        Commands::Dashboard { text } => {
            print!("{}", run_sentiment(&config, model, read_input(text)?).await?);
            print!("{}", run_ranking(&config).await);
            print!("{}", dataset_panel(&config.dataset));
            print!("{}", apps_panel(&config.catalog().apps()));
        },
    }

    Ok(())
}

async fn run_sentiment(config: &Config, model: Arc<ModelHandle>, input: String) -> anyhow::Result<String> {
    let text_config = config.text.clone();
    let out = tokio::task::spawn_blocking(move || sentiment_panel(&model, &text_config, &input)).await?;
    Ok(out)
}

async fn run_ranking(config: &Config) -> String {
    let catalog_config = config.catalog();
    let apps = catalog_config.apps();

    let catalog = ProgressCatalog::new(PlayStoreCatalog::new(&catalog_config), apps.len());
    let out = ranking_panel(&catalog, &apps).await;
    catalog.finish();
    out
}

fn read_input(text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(DEFAULT_INPUT.to_owned());
    }

    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;
    if input.is_empty() {
        return Ok(DEFAULT_INPUT.to_owned());
    }
    Ok(input)
}
