//! Doesaegim - plan your trips day by day from the terminal
//!
//! A thin command-line front end over the core view models:
//! - Travels with a name and date range
//! - Plans listed in dated sections
//! - Local SQLite storage, no network

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use doesaegim_core::{paths, SqliteRepository};

mod config;
mod plan_cmd;
mod travel_cmd;

use config::{AppConfig, DATABASE_ENV_VAR};

/// Doesaegim - Trip planner
#[derive(Parser)]
#[command(name = "doesaegim")]
#[command(about = "Plan your trips day by day from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database file (overrides DOESAEGIM_DB and the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage travels
    Travel {
        #[command(subcommand)]
        action: TravelCommands,
    },

    /// Manage the plans of a travel
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
}

#[derive(Subcommand)]
enum TravelCommands {
    /// Create a travel
    Add {
        #[arg(long)]
        name: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
    /// List travels
    List,
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Add a plan to a travel
    Add {
        #[arg(long)]
        travel: Uuid,
        #[arg(long)]
        name: String,
        /// When it happens ("YYYY-MM-DD HH:MM"); undated plans are not listed
        #[arg(long, value_parser = plan_cmd::parse_plan_date)]
        date: Option<NaiveDateTime>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Show plans grouped by day
    List {
        #[arg(long)]
        travel: Uuid,
        /// Print sections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the plan at a section/row shown by `plan list`
    Delete {
        #[arg(long)]
        travel: Uuid,
        #[arg(long)]
        section: usize,
        #[arg(long)]
        row: usize,
    },
    /// Mark the plan at a section/row as done
    Done {
        #[arg(long)]
        travel: Uuid,
        #[arg(long)]
        section: usize,
        #[arg(long)]
        row: usize,
        /// Mark as pending instead
        #[arg(long)]
        undo: bool,
    },
}

/// Log to a file so command output stays clean
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("doesaegim.log"))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let file = config::load_config()?;
    let app_config = AppConfig::resolve(cli.db, std::env::var(DATABASE_ENV_VAR).ok(), &file);
    tracing::info!("Using database {}", app_config.database_path.display());

    let repo = Rc::new(
        SqliteRepository::open(&app_config.database_path).with_context(|| {
            format!(
                "failed to open database at {}",
                app_config.database_path.display()
            )
        })?,
    );
    let formatter = app_config.formatter;

    match cli.command {
        Commands::Travel { action } => match action {
            TravelCommands::Add { name, start, end } => travel_cmd::add(&repo, &name, start, end),
            TravelCommands::List => travel_cmd::list(&repo),
        },
        Commands::Plan { action } => match action {
            PlanCommands::Add {
                travel,
                name,
                date,
                content,
                location,
            } => plan_cmd::add(
                &repo,
                travel,
                plan_cmd::NewPlan {
                    name,
                    date,
                    content,
                    location,
                },
            ),
            PlanCommands::List { travel, json } => plan_cmd::list(&repo, travel, formatter, json),
            PlanCommands::Delete {
                travel,
                section,
                row,
            } => plan_cmd::delete(&repo, travel, formatter, section, row),
            PlanCommands::Done {
                travel,
                section,
                row,
                undo,
            } => plan_cmd::set_complete(&repo, travel, formatter, section, row, !undo),
        },
    }
}
