//! `doesaegim plan` subcommands
//!
//! Every command builds a fresh list view model over the repository, so
//! section/row coordinates match what `plan list` printed.

use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use doesaegim_core::view_model::{PlanListViewModel, PlanViewModel, SectionDateFormatter};
use doesaegim_core::{Plan, PlanDto, PlanRepository, SqliteRepository, TravelRepository};

/// Accepted input format for plan dates
const PLAN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// clap value parser for `--date`
pub fn parse_plan_date(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, PLAN_DATE_FORMAT)
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM\": {}", e))
}

/// Optional fields of a new plan
pub struct NewPlan {
    pub name: String,
    pub date: Option<NaiveDateTime>,
    pub content: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize)]
struct SectionOutput<'a> {
    title: Option<String>,
    plans: Vec<&'a Plan>,
}

fn open_list(
    repo: &Rc<SqliteRepository>,
    travel_id: Uuid,
    formatter: SectionDateFormatter,
) -> Result<PlanListViewModel> {
    let travel = repo
        .find_travel(travel_id)?
        .with_context(|| format!("travel {} not found", travel_id))?;
    let mut list = PlanListViewModel::with_formatter(travel, repo.clone(), formatter);
    list.fetch().context("failed to load plans")?;
    Ok(list)
}

pub fn add(repo: &SqliteRepository, travel_id: Uuid, plan: NewPlan) -> Result<()> {
    let travel = repo
        .find_travel(travel_id)?
        .with_context(|| format!("travel {} not found", travel_id))?;

    let mut dto = PlanDto::new(&travel, plan.name, plan.date);
    if let Some(content) = plan.content {
        dto = dto.with_content(content);
    }
    if let Some(location) = plan.location {
        dto = dto.with_location(location);
    }
    let saved = repo.add_plan(&dto)?;

    if saved.date.is_none() {
        println!("Added plan {} (no date, it will not be listed)", saved.id);
    } else {
        println!("Added plan {}", saved.id);
    }
    Ok(())
}

pub fn list(
    repo: &Rc<SqliteRepository>,
    travel_id: Uuid,
    formatter: SectionDateFormatter,
    json: bool,
) -> Result<()> {
    let list = open_list(repo, travel_id, formatter)?;

    if json {
        let mut sections = Vec::with_capacity(list.section_count());
        for (section, items) in list.sections().iter().enumerate() {
            sections.push(SectionOutput {
                title: list.title(section)?,
                plans: items.iter().map(PlanViewModel::plan).collect(),
            });
        }
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    println!("{}", list.navigation_title());
    if list.is_empty() {
        println!();
        println!("  No plans yet.");
        return Ok(());
    }

    for (section, items) in list.sections().iter().enumerate() {
        println!();
        println!("{}", list.title(section)?.unwrap_or_default());
        for (row, item) in items.iter().enumerate() {
            println!("  {}", format_row(section, row, item));
        }
    }
    Ok(())
}

fn format_row(section: usize, row: usize, item: &PlanViewModel) -> String {
    let check = if item.is_complete() { "x" } else { " " };
    let time = item
        .date()
        .map(|date| date.format("%H:%M").to_string())
        .unwrap_or_default();
    let mut line = format!("{}/{} [{}] {} {}", section, row, check, time, item.name());
    if let Some(location) = &item.plan().location {
        line.push_str(&format!(" @ {}", location));
    }
    line
}

pub fn delete(
    repo: &Rc<SqliteRepository>,
    travel_id: Uuid,
    formatter: SectionDateFormatter,
    section: usize,
    row: usize,
) -> Result<()> {
    let mut list = open_list(repo, travel_id, formatter)?;

    match list.delete_plan(section, row)? {
        Some(id) => println!("Deleted plan {}", id),
        None => println!("No plan at {}/{}", section, row),
    }
    Ok(())
}

pub fn set_complete(
    repo: &Rc<SqliteRepository>,
    travel_id: Uuid,
    formatter: SectionDateFormatter,
    section: usize,
    row: usize,
    is_complete: bool,
) -> Result<()> {
    let mut list = open_list(repo, travel_id, formatter)?;

    let id = list
        .sections()
        .get(section)
        .and_then(|items| items.get(row))
        .map(PlanViewModel::id)
        .with_context(|| format!("no plan at {}/{}", section, row))?;
    let item = list
        .item_mut(section, row, id)?
        .with_context(|| format!("plan at {}/{} changed", section, row))?;
    item.set_complete(is_complete)?;

    println!(
        "Marked {} as {}",
        item.name(),
        if is_complete { "done" } else { "pending" }
    );
    Ok(())
}
