//! sluice-cli — validate program definitions and simulate monthly payouts.
//!
//! Reads program definitions from a JSON file, runs them through the same
//! editing and finalization pipeline the interactive surface uses, and
//! either reports every unmet condition (`check`) or routes a projected
//! monthly yield through the finalized programs (`simulate`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::info;

use sluice_core::ident::{EntropyIdProvider, IdProvider, SequenceIdProvider};
use sluice_core::types::ProgramCategory;
use sluice_program::form::ProgramForm;
use sluice_program::registry::ProgramRegistry;
use sluice_program::session::DraftSession;

mod format;

use format::format_currency;

/// Treasury program allocation tool.
#[derive(Parser)]
#[command(name = "sluice-cli")]
#[command(version, about = "Route yield to the programs that earn it.")]
struct Cli {
    /// Use deterministic sequential ids instead of random ones.
    #[arg(long, global = true)]
    seed_ids: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every program definition in a file.
    Check(CheckArgs),
    /// Finalize the programs and simulate one month's payout.
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// JSON file holding an array of program definitions.
    file: PathBuf,
}

#[derive(Args)]
struct SimulateArgs {
    /// JSON file holding an array of program definitions.
    file: PathBuf,

    /// Projected monthly yield in dollars.
    #[arg(long, default_value = "50000")]
    projected_yield: f64,

    /// Emit the payout summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// One program definition as written in the input file.
#[derive(Debug, Deserialize)]
struct ProgramInput {
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    allocation: f64,
    wallets: Vec<WalletInput>,
}

#[derive(Debug, Deserialize)]
struct WalletInput {
    address: String,
    percent: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let ids: Box<dyn IdProvider> = if cli.seed_ids {
        Box::new(SequenceIdProvider::new())
    } else {
        Box::new(EntropyIdProvider)
    };

    match cli.command {
        Commands::Check(args) => check(&args, ids),
        Commands::Simulate(args) => simulate(&args, ids),
    }
}

fn load_programs(path: &Path) -> Result<Vec<ProgramInput>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let programs: Vec<ProgramInput> =
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))?;
    if programs.is_empty() {
        bail!("{} contains no program definitions", path.display());
    }
    Ok(programs)
}

/// Populate a fresh form from a file entry. The seeded split row takes the
/// first wallet; further wallets get new rows.
fn fill_form(form: &mut ProgramForm, input: &ProgramInput, ids: &dyn IdProvider) -> Result<()> {
    let category: ProgramCategory = input
        .category
        .parse()
        .with_context(|| format!("program {:?}", input.name))?;

    form.set_name(&input.name);
    form.set_description(&input.description);
    form.set_category(category);
    form.set_allocation_input(&input.allocation.to_string());

    for (i, wallet) in input.wallets.iter().enumerate() {
        let row_id = if i == 0 {
            form.splits().rows()[0].id.clone()
        } else {
            form.splits_mut().add(ids).id.clone()
        };
        form.splits_mut().set_address(&row_id, &wallet.address);
        form.splits_mut().set_percent(&row_id, wallet.percent);
    }
    Ok(())
}

fn check(args: &CheckArgs, ids: Box<dyn IdProvider>) -> Result<()> {
    let programs = load_programs(&args.file)?;
    let mut failed = 0usize;

    for input in &programs {
        let mut form = ProgramForm::new(&ids);
        fill_form(&mut form, input, &ids)?;
        let violations = form.violations();
        if violations.is_empty() {
            println!("ok    {}", input.name);
        } else {
            failed += 1;
            println!("FAIL  {}", input.name);
            for violation in &violations {
                println!("        {violation}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} program(s) failed validation", programs.len());
    }
    info!(count = programs.len(), "all programs valid");
    Ok(())
}

fn simulate(args: &SimulateArgs, ids: Box<dyn IdProvider>) -> Result<()> {
    if !args.projected_yield.is_finite() || args.projected_yield < 0.0 {
        bail!("--projected-yield must be a non-negative number");
    }

    let programs = load_programs(&args.file)?;
    let mut session = DraftSession::new(ids);
    let mut registry = ProgramRegistry::new();

    for input in &programs {
        fill_session(&mut session, input)?;
        if let Err(failure) = session.submit(&mut registry) {
            let mut lines = String::new();
            for violation in &failure.violations {
                lines.push_str(&format!("\n  {violation}"));
            }
            bail!("program {:?} failed validation:{lines}", input.name);
        }
    }

    let summary = registry.simulate(args.projected_yield);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Projected monthly yield: {}",
        format_currency(summary.projected_yield)
    );
    println!();
    for line in &summary.programs {
        println!(
            "{}  [{}]  {}% -> {}",
            line.name,
            line.category.label(),
            line.allocation,
            format_currency(line.amount)
        );
        for wallet in &line.wallets {
            println!(
                "    {}  {}% -> {}",
                wallet.address,
                wallet.percent,
                format_currency(wallet.amount)
            );
        }
    }
    println!();
    println!("Total routed: {}", format_currency(summary.total_routed));
    Ok(())
}

/// Same as [`fill_form`] but through a session, so row ids come from the
/// session's own provider and the surface resets between programs.
fn fill_session(session: &mut DraftSession<Box<dyn IdProvider>>, input: &ProgramInput) -> Result<()> {
    let category: ProgramCategory = input
        .category
        .parse()
        .with_context(|| format!("program {:?}", input.name))?;

    {
        let form = session.form_mut();
        form.set_name(&input.name);
        form.set_description(&input.description);
        form.set_category(category);
        form.set_allocation_input(&input.allocation.to_string());
    }

    for (i, wallet) in input.wallets.iter().enumerate() {
        let row_id = if i == 0 {
            session.form().splits().rows()[0].id.clone()
        } else {
            session.add_split()
        };
        let splits = session.form_mut().splits_mut();
        splits.set_address(&row_id, &wallet.address);
        splits.set_percent(&row_id, wallet.percent);
    }
    Ok(())
}
