use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use sentilens::analysis::SentimentAnalyzer;
use sentilens::client::ClaudeClient;
use sentilens::config::AppConfig;
use sentilens::{batch, report, storage, Error};

#[derive(Parser)]
#[command(name = "sentilens")]
#[command(about = "Analyze sentiment and emotions of comments using Claude")]
#[command(version)]
struct Cli {
    /// Optional TOML config file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single JSON file of comments
    Analyze {
        /// Path to input JSON file containing comments
        input_file: PathBuf,

        /// Path to output JSON file
        #[arg(short, long, default_value = "data/output/results.json")]
        output: PathBuf,

        /// Don't display formatted report
        #[arg(long)]
        no_display: bool,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Analyze every JSON file in a directory
    Batch {
        /// Directory containing JSON files
        input_dir: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "data/output/batch")]
        output_dir: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },
}

#[derive(Args)]
struct AnalysisArgs {
    /// JSON field containing comment text
    #[arg(short, long, default_value = "text")]
    field: String,

    /// Model to use instead of the configured default
    #[arg(long)]
    model: Option<String>,

    /// Max tokens in the response instead of the configured default
    #[arg(long)]
    max_tokens: Option<u32>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let default_filter = format!("sentilens={}", config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Analyze {
            input_file,
            output,
            no_display,
            analysis,
        } => run_analyze(&config, &input_file, &output, no_display, analysis).await,
        Commands::Batch {
            input_dir,
            output_dir,
            analysis,
        } => run_batch_command(&config, &input_dir, &output_dir, analysis).await,
    }
}

fn build_analyzer(
    config: &AppConfig,
    args: &AnalysisArgs,
) -> sentilens::Result<SentimentAnalyzer> {
    let client = ClaudeClient::new(None, &config.claude)?;
    Ok(SentimentAnalyzer::new(Arc::new(client))
        .with_overrides(args.model.clone(), args.max_tokens))
}

async fn run_analyze(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    no_display: bool,
    args: AnalysisArgs,
) -> ExitCode {
    match analyze_inner(config, input, output, no_display, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::NotFound(_)) => {
            error!("{}", e);
            println!("\nExpected JSON format:");
            println!("[");
            println!("  {{\"text\": \"This is great!\", \"author\": \"user1\"}},");
            println!("  {{\"text\": \"Not happy about this\", \"author\": \"user2\"}}");
            println!("]");
            ExitCode::FAILURE
        }
        Err(e @ Error::Validation(_)) => {
            error!("Validation error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Unexpected error: {:?}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}

async fn analyze_inner(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    no_display: bool,
    args: &AnalysisArgs,
) -> sentilens::Result<()> {
    info!("Loading comments from {}", input.display());
    let comments = storage::load(input)?;
    info!("Loaded {} comments", comments.len());

    let analyzer = build_analyzer(config, args)?;
    info!("Starting sentiment analysis...");
    let results = analyzer.analyze(&comments, &args.field).await?;
    info!("Analysis complete");

    if !no_display {
        report::print_report(&results);
    }

    storage::save_results(&results, output)?;
    info!("Results saved to {}", output.display());
    Ok(())
}

async fn run_batch_command(
    config: &AppConfig,
    input_dir: &Path,
    output_dir: &Path,
    args: AnalysisArgs,
) -> ExitCode {
    match batch_inner(config, input_dir, output_dir, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Batch processing failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn batch_inner(
    config: &AppConfig,
    input_dir: &Path,
    output_dir: &Path,
    args: &AnalysisArgs,
) -> Result<()> {
    if batch::collect_json_files(input_dir).is_empty() {
        return Err(Error::NoInputFiles(input_dir.to_path_buf()).into());
    }

    let analyzer = build_analyzer(config, args)?;
    let summary = batch::run_batch(&analyzer, input_dir, output_dir, &args.field).await?;

    info!(
        "Batch processing complete: {} saved, {} failed",
        summary.saved.len(),
        summary.failed.len()
    );
    Ok(())
}
