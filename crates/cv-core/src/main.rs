//! cvparse — operator CLI for the parsing pipeline.
//!
//! Reads extracted résumé text from a file (or stdin), prints the structured
//! record as JSON. `--sections` prints the diagnostic bucketing view
//! instead; `--assist` runs the external vendor cascade configured through
//! the environment.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_core::assist::providers_from_config;
use cv_core::{debug_sections, parse_locally, parse_with_assist, AssistConfig, Tuning};

#[derive(Parser, Debug)]
#[command(name = "cvparse", about = "Parse extracted resume text into a structured record")]
struct Cli {
    /// Input text file; "-" reads stdin.
    input: PathBuf,

    /// Print the section bucketing view instead of the parsed record.
    #[arg(long)]
    sections: bool,

    /// Consult the external vendors configured in the environment.
    #[arg(long)]
    assist: bool,

    /// Language hint forwarded to the vendors (e.g. "fr").
    #[arg(long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let text = read_input(&cli.input)?;
    let tuning = Tuning::default();

    let output = if cli.sections {
        serde_json::to_string_pretty(&debug_sections(&text))?
    } else if cli.assist {
        let config = AssistConfig::from_env()?;
        let providers = providers_from_config(&config);
        info!(vendors = providers.len(), "external refinement enabled");
        let cv = parse_with_assist(&text, cli.language.as_deref(), &providers, &tuning).await;
        serde_json::to_string_pretty(&cv)?
    } else {
        serde_json::to_string_pretty(&parse_locally(&text, &tuning))?
    };

    println!("{output}");
    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
