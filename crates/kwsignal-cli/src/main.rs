mod render;

use clap::{Parser, Subcommand};
use kwsignal_core::{AppConfig, SearchAdSettings};
use kwsignal_naver::{signed_headers, SearchAdCredentials, KEYWORDS_TOOL_PATH};
use kwsignal_pipeline::KeywordAnalyzer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kwsignal-cli")]
#[command(about = "Keyword search-volume and content-competition analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate signals for a seed phrase and its related keywords.
    Analyze {
        /// Seed phrase; whitespace is ignored.
        seed: String,
        /// Print the batch as JSON instead of cards and a table.
        #[arg(long)]
        json: bool,
    },
    /// Print a signed header set for the search-advertising API.
    Sign {
        #[arg(long, default_value = "GET")]
        method: String,
        #[arg(long, default_value = KEYWORDS_TOOL_PATH)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { seed, json } => {
            let config = kwsignal_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            tracing::debug!(?config, "loaded configuration");
            run_analyze(&config, &seed, json).await
        }
        Commands::Sign { method, path } => {
            let settings = kwsignal_core::load_search_ad_settings_from_env()?;
            init_tracing(&settings.log_level)?;
            tracing::debug!(?settings, "loaded signing settings");
            run_sign(&settings, &method, &path);
            Ok(())
        }
    }
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// stays clean for `--json`.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run_analyze(config: &AppConfig, seed: &str, json: bool) -> anyhow::Result<()> {
    let analyzer = KeywordAnalyzer::from_app_config(config)?;
    let batch = analyzer
        .try_aggregate(seed)
        .await
        .map_err(|e| anyhow::anyhow!(e).context("keyword data is unavailable right now"))?;

    if json {
        let report = render::AnalysisReport::new(seed, &batch);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if batch.is_empty() {
        println!("{}", render::NO_DATA_NOTICE);
    } else {
        print!("{}", render::render_cards(seed, &batch));
        println!();
        print!("{}", render::render_table(&batch));
    }
    Ok(())
}

fn run_sign(settings: &SearchAdSettings, method: &str, path: &str) {
    let credentials = SearchAdCredentials::new(
        &settings.ad_access_key,
        &settings.ad_secret_key,
        &settings.ad_customer_id,
    );
    let headers = signed_headers(&method.to_uppercase(), path, &credentials);
    for (name, value) in headers.pairs() {
        println!("{name}: {value}");
    }
}
