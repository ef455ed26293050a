//! CLI for checking how thinking budgets are classified and normalized.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thinkcap_core::modules::{config, logger};
use thinkcap_core::{BudgetNormalizer, ModelClassifier, ModelRegistry};
use thinkcap_types::{Provider, ThinkcapConfig, ThinkingSupport};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to $THINKCAP_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the budget that would be sent for a model
    Normalize {
        /// Exact model id
        #[arg(long)]
        model: String,
        /// Requested budget (-1 = dynamic); the configured default when omitted
        #[arg(long, allow_negative_numbers = true)]
        budget: Option<i64>,
    },
    /// Prints classifier decisions for a model
    Classify {
        /// Exact model id
        #[arg(long)]
        model: String,
        /// Provider whose naming rules apply
        #[arg(long, default_value = "antigravity")]
        provider: String,
    },
    /// Lists registered models and their thinking ranges
    Models {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn load(path: Option<PathBuf>) -> Result<ThinkcapConfig> {
    let path = match path {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    config::load_config(&path).with_context(|| format!("loading config {}", path.display()))
}

fn describe_range(range: Option<ThinkingSupport>) -> String {
    match range {
        Some(r) => format!(
            "{}..={} zero={} dynamic={}",
            r.min, r.max, r.zero_allowed, r.dynamic_allowed
        ),
        None => "-".to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level);

    let cfg = load(cli.config)?;
    let registry = ModelRegistry::from_config(&cfg).context("building model registry")?;
    info!("Registry ready with {} model(s)", registry.len());

    match cli.command {
        Commands::Normalize { model, budget } => {
            let requested = budget.unwrap_or(cfg.default_budget);
            let normalizer = BudgetNormalizer::new(&registry);
            let (effective, reason) = normalizer.normalize_with_reason(&model, requested);
            println!("model:     {model}");
            println!("requested: {requested}");
            println!("effective: {effective}");
            println!("reason:    {reason}");
        },
        Commands::Classify { model, provider } => {
            let provider = Provider::from_name(&provider);
            let classifier = ModelClassifier::from_config(&cfg);
            let normalizer = BudgetNormalizer::new(&registry);
            println!("model:            {model}");
            println!("provider:         {provider}");
            println!("thinking_enabled: {}", classifier.is_thinking_enabled(provider, &model));
            println!("special_handling: {}", classifier.needs_special_handling(provider, &model));
            println!("registry_support: {}", normalizer.supports_thinking(&model));
        },
        Commands::Models { json } => {
            let models = registry.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&models)?);
            } else {
                for info in models {
                    println!(
                        "{:<32} {:<12} {}",
                        info.id,
                        info.provider.as_str(),
                        describe_range(info.thinking)
                    );
                }
            }
        },
    }
    Ok(())
}
