//! Converge - dry-run convergence CLI
//!
//! The `converge` command expands a run-list against a model-source directory
//! and shows what a convergence pass WOULD do, without touching the host.
//!
//! ## Commands
//!
//! - `plan`: run one dry-run pass and print every recorded resource
//! - `check`: expansion only - verify every recipe in the run-list resolves

mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use converge_engine::{expand, ModelSource};
use converge_harness::DryRunHarness;
use converge_model::RecipeName;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "converge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dry-run convergence harness", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one dry-run convergence pass and print the plan
    Plan {
        /// Model-source directory holding cookbooks
        #[arg(short, long)]
        model_path: PathBuf,

        /// Recipes to converge, in run-list order
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Node name for the pass
        #[arg(long, default_value = "converge-cli-node")]
        node_name: String,

        /// Print the plan as a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify every recipe in the run-list resolves, without executing
    Check {
        /// Model-source directory holding cookbooks
        #[arg(short, long)]
        model_path: PathBuf,

        /// Recipes to check, in run-list order
        #[arg(required = true)]
        recipes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    telemetry::init_tracing(cli.json_logs, level);

    match cli.command {
        Commands::Plan {
            model_path,
            recipes,
            node_name,
            json,
        } => cmd_plan(&model_path, &recipes, &node_name, json),
        Commands::Check { model_path, recipes } => cmd_check(&model_path, &recipes),
    }
}

fn cmd_plan(model_path: &PathBuf, recipes: &[String], node_name: &str, json: bool) -> Result<()> {
    let mut harness = DryRunHarness::new(model_path)
        .with_context(|| format!("Failed to open model source {}", model_path.display()))?
        .with_node_name(node_name);

    let summary = harness
        .converge(recipes)
        .with_context(|| format!("Convergence failed for run-list {recipes:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(harness.resources())?);
        return Ok(());
    }

    for record in harness.resources() {
        let provenance = record
            .declared_at
            .as_ref()
            .map(|p| format!("  ({p})"))
            .unwrap_or_default();
        println!(
            "{:>4}  {:<12} {:<40} {}{}",
            record.seq, record.type_name, record.name, record.action, provenance
        );
    }
    println!(
        "{} resource(s) would converge in {} ms (pass {})",
        summary.resources_recorded, summary.duration_ms, summary.pass_id
    );

    Ok(())
}

fn cmd_check(model_path: &PathBuf, recipes: &[String]) -> Result<()> {
    let source = ModelSource::new(model_path)
        .with_context(|| format!("Failed to open model source {}", model_path.display()))?;

    let names = recipes
        .iter()
        .map(|r| RecipeName::parse(r))
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Invalid recipe name in run-list")?;

    let expansion =
        expand(&source, &names).with_context(|| format!("Run-list {recipes:?} does not resolve"))?;

    for recipe in expansion.expanded_recipes() {
        println!("{recipe}");
    }
    println!(
        "{} recipe(s) resolve to {} resource(s)",
        expansion.expanded_recipes().len(),
        expansion.len()
    );

    Ok(())
}
