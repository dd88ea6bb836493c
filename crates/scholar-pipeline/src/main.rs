use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scholar_core::config::defaults;
use scholar_core::text::format_confidence;
use scholar_core::ScholarConfig;
use scholar_observability::init_tracing;
use scholar_pipeline::{ErrorResponse, Orchestrator, ResearchRequest, ResearchResponse, SharedModels};

#[derive(Parser)]
#[command(name = "scholar", version, about = "Research-query summarization pipeline")]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Semantic Scholar API key.
    #[arg(long, env = "SCHOLAR_S2_API_KEY", global = true, hide_env_values = true)]
    s2_api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one research query and print the JSON response.
    Query {
        /// The research question.
        text: String,

        /// Number of papers to analyze.
        #[arg(long, default_value_t = defaults::DEFAULT_MAX_PAPERS)]
        max_papers: usize,

        /// Flag results below this confidence (0 to 1).
        #[arg(long, default_value_t = 0.0)]
        min_confidence: f64,

        /// Leave abstracts out of the source list.
        #[arg(long)]
        no_abstract: bool,
    },
    /// Report the active embedding provider and configured sources.
    Health,
}

fn load_config(cli: &Cli) -> anyhow::Result<ScholarConfig> {
    let mut config = match &cli.config {
        Some(path) => ScholarConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ScholarConfig::default(),
    };
    if let Some(key) = &cli.s2_api_key {
        config.sources.semantic_scholar_api_key = Some(key.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.observability);

    match cli.command {
        Command::Query {
            text,
            max_papers,
            min_confidence,
            no_abstract,
        } => {
            let request = ResearchRequest {
                query: text,
                max_papers,
                include_abstract: !no_abstract,
                min_confidence,
            };
            let orchestrator = Orchestrator::from_config(&config)?;
            match orchestrator.run(&request.to_query()).await {
                Ok(result) => {
                    let response = ResearchResponse::from_result(&result, request.include_abstract);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    eprintln!(
                        "confidence {} (quality {})",
                        format_confidence(response.confidence_score),
                        response.quality_display()
                    );
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("{}", serde_json::to_string_pretty(&ErrorResponse::from_error(&e))?);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Health => {
            let orchestrator = Orchestrator::from_config(&config)?;
            let models = SharedModels::global(&config.embedding);
            let health = serde_json::json!({
                "status": "ok",
                "version": scholar_core::constants::VERSION,
                "embedding_provider": models.embeddings.active_provider(),
                "abstractive_summarizer": models.summarizer.name(),
                "ranking_mode": orchestrator.ranking().preferred_mode(),
                "primary_source": orchestrator.gateway().primary_name(),
                "secondary_source": orchestrator.gateway().secondary_name(),
                "time_budget_ms": config.pipeline.time_budget_ms,
            });
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
