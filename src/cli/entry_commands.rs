// src/cli/entry_commands.rs
use std::path::Path;

use crossterm::style::Stylize;
use tracing::{debug, instrument, warn};

use crate::api::types::EntryDto;
use crate::application::error::ApplicationError;
use crate::application::services::entry_service::EntryChanges;
use crate::cli::display::{show_entries, show_entry_details, show_trash};
use crate::cli::error::{CliError, CliResult};
use crate::domain::entry::Entry;
use crate::domain::list_filter::ListFilter;
use crate::domain::tag_record::TagRecord;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::repositories::sqlite::repository::SqliteEntryRepository;
use crate::util::helper::confirm;

/// Run tag extraction for a save, falling back to an empty record when the
/// call fails. The text is never lost to an extraction failure; the user
/// gets the per-kind message plus a degraded-success note instead.
fn extract_or_fallback(services: &ServiceContainer, text: &str) -> Option<TagRecord> {
    match services.tagging_service.extract_tags(text) {
        Ok(tags) => Some(tags),
        Err(e) => {
            warn!("tag extraction failed: {}", e);
            eprintln!("{}", format!("{}", e).yellow());
            eprintln!("{}", "saving without tags".yellow());
            None
        }
    }
}

#[instrument(skip(services), level = "debug")]
pub fn add(services: &ServiceContainer, text: &str, no_tags: bool) -> CliResult<()> {
    let tags = if no_tags {
        None
    } else {
        extract_or_fallback(services, text)
    };

    let entry = services.entry_service.add_entry(text, tags)?;
    eprintln!(
        "{}",
        format!("Added entry {}.", entry.id.unwrap_or_default()).green()
    );
    show_entry_details(&entry);
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn list(services: &ServiceContainer, filter: &Option<String>, is_json: bool) -> CliResult<()> {
    let filter = filter
        .as_deref()
        .map(str::parse::<ListFilter>)
        .transpose()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let entries = services.entry_service.list_active()?;

    if is_json {
        let filtered: Vec<&Entry> = entries
            .iter()
            .filter(|e| filter.as_ref().map_or(true, |f| f.matches(&e.tags)))
            .collect();
        write_entries_as_json(&filtered)?;
    } else {
        show_entries(&entries, filter.as_ref());
    }
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn edit(services: &ServiceContainer, id: i32, text: &str, no_tags: bool) -> CliResult<()> {
    // Editing re-derives the tags from the new text; on extraction failure
    // only the text is updated.
    let tags = if no_tags {
        None
    } else {
        extract_or_fallback(services, text)
    };

    let entry = services.entry_service.update_entry(
        id,
        EntryChanges {
            text: Some(text.to_string()),
            tags,
            is_expanded: None,
        },
    )?;

    eprintln!("{}", format!("Updated entry {}.", id).green());
    show_entry_details(&entry);
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn toggle(services: &ServiceContainer, id: i32) -> CliResult<()> {
    let entry = services
        .entry_service
        .get_entry(id)?
        .ok_or(ApplicationError::EntryNotFound(id))?;

    let updated = services.entry_service.update_entry(
        id,
        EntryChanges {
            is_expanded: Some(!entry.is_expanded),
            ..Default::default()
        },
    )?;

    debug!("entry {} expanded={}", id, updated.is_expanded);
    show_entry_details(&updated);
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn show(services: &ServiceContainer, id: i32) -> CliResult<()> {
    let entry = services
        .entry_service
        .get_entry(id)?
        .ok_or(ApplicationError::EntryNotFound(id))?;

    show_entry_details(&entry);
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn delete(services: &ServiceContainer, id: i32) -> CliResult<()> {
    services.entry_service.move_to_trash(id)?;
    eprintln!(
        "{}",
        format!("Entry {} moved to trash. Restore with 'ticklist restore {}'.", id, id).green()
    );
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn trash(services: &ServiceContainer, is_json: bool) -> CliResult<()> {
    let entries = services.entry_service.list_trashed()?;

    if is_json {
        let refs: Vec<&Entry> = entries.iter().collect();
        write_entries_as_json(&refs)?;
    } else {
        show_trash(&entries);
    }
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn restore(services: &ServiceContainer, id: i32) -> CliResult<()> {
    let entry = services.entry_service.restore(id)?;
    eprintln!("{}", format!("Entry {} restored.", id).green());
    show_entry_details(&entry);
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn purge(services: &ServiceContainer, id: i32, yes: bool) -> CliResult<()> {
    if !yes && !confirm(&format!("Permanently delete entry {}? This cannot be undone", id)) {
        return Err(CliError::OperationAborted);
    }

    let deleted = services.entry_service.delete_permanently(id)?;
    if !deleted {
        return Err(CliError::Application(ApplicationError::EntryNotFound(id)));
    }

    eprintln!("{}", format!("Entry {} permanently deleted.", id).green());
    Ok(())
}

#[instrument(level = "debug")]
pub fn create_db(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::InvalidInput(format!(
            "Database already exists at {}",
            path.display()
        )));
    }

    let db_url = path
        .to_str()
        .ok_or_else(|| CliError::InvalidInput("Database path is not valid UTF-8".to_string()))?;

    SqliteEntryRepository::from_url(db_url)
        .map_err(|e| CliError::CommandFailed(format!("Failed to create database: {}", e)))?;

    eprintln!(
        "{}",
        format!("Created database at {}.", path.display()).green()
    );
    eprintln!("Point TICKLIST_DB_URL at it or set db_url in ~/.config/ticklist/config.toml.");
    Ok(())
}

fn write_entries_as_json(entries: &[&Entry]) -> CliResult<()> {
    let views: Vec<EntryDto> = entries.iter().map(|e| EntryDto::from((*e).clone())).collect();
    let json = serde_json::to_string_pretty(&views)
        .map_err(|e| CliError::Other(format!("Failed to serialize entries: {}", e)))?;
    println!("{}", json);
    Ok(())
}
