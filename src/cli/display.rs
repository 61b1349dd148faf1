// src/cli/display.rs
use crossterm::style::Stylize;

use crate::domain::entry::Entry;
use crate::domain::list_filter::ListFilter;
use crate::domain::tag_record::TagRecord;
use crate::util::helper::format_relative;

/// Collapsed entries are cut at this many characters (not bytes; the
/// corpus is CJK-heavy).
pub const COLLAPSE_THRESHOLD: usize = 80;

/// Truncate to `max` characters, appending an ellipsis when cut.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn render_tags(tags: &TagRecord) -> String {
    let mut parts = Vec::new();

    if let Some(todo) = tags.todo {
        let label = if todo { "待办" } else { "记录" };
        parts.push(format!("{}", label.green()));
    }
    if let Some(person) = &tags.person {
        parts.push(format!("{}", person.as_str().blue()));
    }
    if let Some(time) = &tags.time {
        parts.push(format!("{}", time.as_str().magenta()));
    }
    if let Some(product) = &tags.product {
        parts.push(format!("{}", product.as_str().yellow()));
    }

    parts.join(" ")
}

fn entry_line(entry: &Entry) -> String {
    let id = entry.id.unwrap_or_default();
    let text = if entry.is_expanded {
        entry.text.clone()
    } else {
        truncate_text(&entry.text, COLLAPSE_THRESHOLD)
    };

    let mut line = format!("{:>4}  {}", id, text);
    if entry.tags.is_empty() {
        // Mirrors the original UI hint for untagged entries.
        line.push_str(&format!("  {}", "[no tags]".dark_grey()));
    } else {
        line.push_str(&format!("  {}", render_tags(&entry.tags)));
    }
    line
}

/// Print the active list, with the optional single-select filter applied
/// client-side.
pub fn show_entries(entries: &[Entry], filter: Option<&ListFilter>) {
    let filtered: Vec<&Entry> = entries
        .iter()
        .filter(|e| filter.map_or(true, |f| f.matches(&e.tags)))
        .collect();

    if let Some(f) = filter {
        eprintln!("filter {}: {} of {} entries", f, filtered.len(), entries.len());
    }

    if filtered.is_empty() {
        eprintln!("no entries");
        return;
    }

    for entry in filtered {
        println!("{}", entry_line(entry));
    }
}

/// Print the trash listing with the time since deletion.
pub fn show_trash(entries: &[Entry]) {
    if entries.is_empty() {
        eprintln!("trash is empty");
        return;
    }

    for entry in entries {
        let deleted = entry
            .deleted_at
            .map(format_relative)
            .unwrap_or_default();
        println!("{}  {}", entry_line(entry), format!("deleted {}", deleted).dark_grey());
    }
}

/// Print one entry in full: complete text, tags, timestamps.
pub fn show_entry_details(entry: &Entry) {
    println!("{:>4}  {}", entry.id.unwrap_or_default(), entry.text);
    if !entry.tags.is_empty() {
        println!("      {}", render_tags(&entry.tags));
    }
    println!(
        "      {}",
        format!(
            "created {} | updated {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.updated_at.format("%Y-%m-%d %H:%M")
        )
        .dark_grey()
    );
    if let Some(deleted_at) = entry.deleted_at {
        println!(
            "      {}",
            format!("in trash since {}", deleted_at.format("%Y-%m-%d %H:%M")).red()
        );
    }
}
