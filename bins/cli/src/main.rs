//! Splitledger CLI
//!
//! Reads a group snapshot as JSON (from a file, or stdin when no path or `-`
//! is given) and prints member balances and the settlement plan. With
//! `--member` the report also carries that member's own view.

mod report;
mod snapshot;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splitledger_core::ledger::SettlementService;
use splitledger_shared::types::MemberId;
use splitledger_shared::{AppConfig, AppError, AppResult};

use crate::report::Report;
use crate::snapshot::Snapshot;

#[derive(Parser, Debug)]
#[command(name = "splitledger")]
#[command(about = "Balances and settlement plan for a group snapshot")]
struct Cli {
    /// Snapshot JSON file; stdin when omitted or `-`.
    snapshot: Option<String>,

    /// Member whose balance and transfers are reported separately.
    #[arg(long)]
    member: Option<MemberId>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splitledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let input = read_input(cli.snapshot.as_deref())?;
    let snapshot: Snapshot = serde_json::from_str(&input).context("Invalid snapshot JSON")?;

    let report = run(&config, snapshot, cli.member).inspect_err(|err| {
        error!(
            code = err.error_code(),
            status = err.status_code(),
            "Settlement failed: {err}"
        );
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot from {path}")),
    }
}

fn run(config: &AppConfig, snapshot: Snapshot, member: Option<MemberId>) -> AppResult<Report> {
    let currency = snapshot.currency.unwrap_or(config.ledger.currency);
    let (members, expenses) = snapshot.into_ledger(currency)?;
    info!(
        members = members.len(),
        expenses = expenses.len(),
        %currency,
        "Snapshot loaded"
    );

    let service = SettlementService::from_config(&config.ledger);
    let result = service
        .compute_group_settlement(&members, &expenses)
        .map_err(AppError::from)?;
    info!(transfers = result.settlements.len(), "Settlement computed");

    let report = Report::new(&result, &expenses, currency, service.mode())?;
    match member {
        Some(member) => report.with_member(member, &result, &expenses),
        None => Ok(report),
    }
}
