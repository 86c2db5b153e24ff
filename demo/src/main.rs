//! WARDEN Fintech Reference Runtime — Demo CLI
//!
//! Runs one or all of the three fintech demo scenarios.  Each scenario uses
//! real WARDEN components (constraint policy engine, simulator, evidence
//! bundle) wired together with mock market data, and exports the full
//! evidence bundle for every run.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- market-analysis
//!   cargo run -p demo -- approval-gate
//!   cargo run -p demo -- limit-breach
//!   cargo run -p demo -- --reports-dir /tmp/evidence run-all

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use warden_contracts::{error::WardenResult, run::RunReport, task::TaskDefinition};
use warden_evidence::EvidenceBundle;
use warden_ref_fintech::mock_data::{sample_policy, sample_registry};
use warden_ref_fintech::scenarios::{approval_gate, limit_breach, market_analysis};

// ── CLI definition ────────────────────────────────────────────────────────────

/// WARDEN — Agent runtime constraint simulator fintech demo.
///
/// Each subcommand runs one or all of the three QuantAlgo scenarios,
/// demonstrating tool permission, step/budget ceilings, approval gates, and
/// tamper-evident evidence export.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "WARDEN fintech reference runtime demo",
    long_about = "Runs WARDEN fintech demo scenarios showing policy gating,\n\
                  step and budget enforcement, approval suspension, and\n\
                  SHA-256 evidence bundle export."
)]
struct Cli {
    /// Base directory for exported evidence bundles.
    #[arg(long, default_value = "reports", global = true)]
    reports_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three fintech scenarios in sequence.
    RunAll,
    /// Scenario 1: Market Analysis (permitted reads, clean completion).
    MarketAnalysis,
    /// Scenario 2: Approval Gate (critical write suspends, unpermitted tool denied).
    ApprovalGate,
    /// Scenario 3: Limit Breach (step and budget ceilings deny mid-task).
    LimitBreach,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(&cli.reports_dir),
        Command::MarketAnalysis => run_market_analysis(&cli.reports_dir),
        Command::ApprovalGate => run_approval_gate(&cli.reports_dir),
        Command::LimitBreach => run_limit_breach(&cli.reports_dir),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all(reports_dir: &Path) -> WardenResult<()> {
    run_market_analysis(reports_dir)?;
    run_approval_gate(reports_dir)?;
    run_limit_breach(reports_dir)?;
    Ok(())
}

fn run_market_analysis(reports_dir: &Path) -> WardenResult<()> {
    let report = market_analysis::run_scenario()?;
    finish("Market Analysis", report, market_analysis::tasks(), reports_dir)
}

fn run_approval_gate(reports_dir: &Path) -> WardenResult<()> {
    let report = approval_gate::run_scenario()?;
    finish("Approval Gate", report, approval_gate::tasks(), reports_dir)
}

fn run_limit_breach(reports_dir: &Path) -> WardenResult<()> {
    let report = limit_breach::run_scenario()?;
    finish("Limit Breach", report, limit_breach::tasks(), reports_dir)
}

/// Print the run's headline numbers and export its evidence bundle.
fn finish(
    name: &str,
    report: RunReport,
    tasks: Vec<TaskDefinition>,
    reports_dir: &Path,
) -> WardenResult<()> {
    println!("Scenario: {}", name);
    println!("  Run ID:      {}", report.run_id);
    println!("  Tasks:       {}", report.task_outcomes.len());
    println!("  Events:      {}", report.trace.len());
    println!("  Violations:  {}", report.violations.len());
    println!("  Warnings:    {}", report.warnings.len());

    let bundle = EvidenceBundle::assemble(&report, &sample_registry(), &sample_policy(), &tasks)?;
    let output_dir = bundle.write_to(reports_dir)?;
    println!("  Evidence:    {}", output_dir.display());
    println!("  Trace hash:  {}", bundle.manifest().trace_digest);
    println!();

    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("WARDEN — Agent Runtime Constraint Simulator");
    println!("Fintech Reference Demo");
    println!("===========================================");
    println!();
    println!("WARDEN enforcement pipeline per step:");
    println!("  [1] PLAN: the next scripted action is proposed");
    println!("  [2] Policy gate evaluates it → Approved / RequiresApproval / Denied");
    println!("  [3] ACT: the mock behavior runs — ONLY on Approved");
    println!("  [4] REVIEW: cost charged, result recorded in the trace");
    println!("  [5] Evidence bundle exported with per-artifact SHA-256 digests");
    println!();
}
