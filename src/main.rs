//! Orchard CLI - count nodes and the edges they imply.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use orchard::GraphCounter;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orchard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("orchard.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn current_platform() -> &'static str {
    std::env::consts::OS
}

/// Build the status line printed by `orchard status`.
fn status_line(version: &str, platform: &str, edges: u64) -> String {
    format!("Orchard {} on {}: edges={}", version, platform, edges)
}

fn populate(ids: &[i64]) -> Result<GraphCounter> {
    let mut counter = GraphCounter::new();
    for &id in ids {
        counter
            .add_node(id)
            .with_context(|| format!("Failed to add node {}", id))?;
    }
    Ok(counter)
}

/// Insert `ids` one by one, describing the counts after each insertion.
fn trace_lines(ids: &[i64]) -> Result<Vec<String>> {
    if ids.is_empty() {
        return Ok(vec!["No nodes given".dimmed().to_string()]);
    }

    let mut counter = GraphCounter::new();
    let mut lines = Vec::with_capacity(ids.len() + 1);
    for &id in ids {
        let nodes = counter
            .add_node(id)
            .with_context(|| format!("Failed to add node {}", id))?;
        lines.push(format!(
            "{} node {} -> nodes={} edges={}",
            "+".green(),
            id.to_string().cyan(),
            nodes,
            counter.edge_count()
        ));
    }
    lines.push(format!("{} {}", "=".blue(), counter.snapshot()));
    Ok(lines)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Status { ids } => {
            let counter = populate(&ids)?;
            println!(
                "{}",
                status_line(env!("GIT_DESCRIBE"), current_platform(), counter.edge_count())
            );
        }

        Command::Trace { ids } => {
            for line in trace_lines(&ids)? {
                println!("{}", line);
            }
        }

        Command::Snapshot { ids, pretty } => {
            let snapshot = populate(&ids)?.snapshot();
            let json = if pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            }
            .context("Failed to serialize snapshot")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
