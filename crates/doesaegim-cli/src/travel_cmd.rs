//! `doesaegim travel` subcommands

use anyhow::{bail, Result};
use chrono::NaiveDate;

use doesaegim_core::view_model::{TravelAddError, TravelAddViewModel};
use doesaegim_core::{SqliteRepository, TravelDto, TravelRepository};

/// Create a travel after running it through the form validation
pub fn add(repo: &SqliteRepository, name: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let mut form = TravelAddViewModel::new(|valid| tracing::debug!("travel form valid: {}", valid));
    form.validate_name(name);
    form.validate_dates(start, end);

    let dto = TravelDto::new(name.trim(), start, end);
    match form.save(repo, &dto) {
        Ok(travel) => {
            println!("Added travel {} ({})", travel.name, travel.id);
            Ok(())
        }
        Err(TravelAddError::Invalid) if !form.text_field_valid() => {
            bail!("travel name must not be empty")
        }
        Err(TravelAddError::Invalid) => {
            bail!("travel ends ({}) before it starts ({})", end, start)
        }
        Err(e) => Err(e.into()),
    }
}

/// Print every travel
pub fn list(repo: &SqliteRepository) -> Result<()> {
    let travels = repo.fetch_travels()?;
    if travels.is_empty() {
        println!("No travels yet.");
        println!();
        println!("  doesaegim travel add --name <name> --start <date> --end <date>");
        return Ok(());
    }

    for travel in &travels {
        println!(
            "{}  {} ~ {}  {}",
            travel.id, travel.start_date, travel.end_date, travel.name
        );
    }
    Ok(())
}
