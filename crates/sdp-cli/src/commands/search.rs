//! Search command implementation
//!
//! Filter and browse the species dataset: substring search over scientific
//! and common names, group and status filters, severity-ordered results,
//! pagination, and an interactive picker that jumps to the detail view.

use crate::commands::show::{render_detail, DetailContext};
use crate::config::Config;
use crate::error::{CliError, Result};
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use sdp_common::species::{class_group, status_label, status_rank, AlertTier, Category, SpeciesRecord};
use std::io::{self, IsTerminal};
use tracing::debug;

/// Run the search command
#[allow(clippy::too_many_arguments)]
pub async fn run(
    query: Vec<String>,
    group: Vec<String>,
    status: Vec<String>,
    format: String,
    no_interactive: bool,
    limit: usize,
    page: usize,
    config: &Config,
) -> Result<()> {
    let query_str = query.join(" ");

    debug!(
        query = %query_str,
        group = ?group,
        status = ?status,
        format = %format,
        limit = limit,
        page = page,
        "Starting search"
    );

    if limit < 1 || limit > 100 {
        return Err(CliError::config("Limit must be between 1 and 100"));
    }
    if page < 1 {
        return Err(CliError::config("Page must be greater than 0"));
    }

    let dataset = super::load_dataset(config)?;
    let mut matches = filter_records(&dataset.records, &query_str, &group, &status);
    matches.sort_by_key(|record| status_rank(&record.category));

    if matches.is_empty() {
        handle_empty_results(&query_str, &dataset.records);
        return Ok(());
    }

    if should_use_interactive(&format, no_interactive) {
        display_interactive(matches, limit, page, config).await
    } else {
        display_non_interactive(&matches, &format, limit, page)
    }
}

/// Whether the picker UI should be used
fn should_use_interactive(format: &str, no_interactive: bool) -> bool {
    if no_interactive {
        return false;
    }
    if format != "interactive" {
        return false;
    }
    io::stdout().is_terminal()
}

/// Apply the query and filters, preserving dataset order.
fn filter_records(
    records: &[SpeciesRecord],
    query: &str,
    groups: &[String],
    statuses: &[String],
) -> Vec<SpeciesRecord> {
    let query = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            if !groups.is_empty() {
                let group = class_group(&record.class);
                let hit = groups
                    .iter()
                    .any(|g| g.eq_ignore_ascii_case(&group) || g.eq_ignore_ascii_case(&record.class));
                if !hit {
                    return false;
                }
            }

            if !statuses.is_empty() {
                let label = status_label(&record.category);
                let hit = statuses.iter().any(|s| {
                    s.eq_ignore_ascii_case(&record.category) || s.eq_ignore_ascii_case(&label)
                });
                if !hit {
                    return false;
                }
            }

            if query.is_empty() {
                return true;
            }
            record.scientific_name.to_lowercase().contains(&query)
                || record
                    .common_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Slice out one page of results.
fn paginate(matches: &[SpeciesRecord], limit: usize, page: usize) -> &[SpeciesRecord] {
    let start = (page - 1).saturating_mul(limit).min(matches.len());
    let end = (start + limit).min(matches.len());
    &matches[start..end]
}

fn total_pages(total: usize, limit: usize) -> usize {
    total.div_ceil(limit).max(1)
}

/// Handle empty search results with fuzzy suggestions
fn handle_empty_results(query: &str, records: &[SpeciesRecord]) {
    println!("{}", "No results found".bold().red());
    println!();

    if !query.trim().is_empty() {
        let suggestions = find_similar_names(query, records);
        if !suggestions.is_empty() {
            println!("{}", "Did you mean:".bold());
            for suggestion in suggestions {
                println!("  - {}", suggestion);
            }
            println!();
        }
    }

    println!("{}", "Try:".bold());
    println!("  - Check your spelling");
    println!("  - Use fewer keywords");
    println!(
        "  - Browse a whole group: {}",
        "sdp search --group Mammals".cyan()
    );
    println!(
        "  - Filter by status: {}",
        "sdp search --status \"Critically Endangered\"".cyan()
    );
}

/// Find dataset names close to the query using edit distance
fn find_similar_names(query: &str, records: &[SpeciesRecord]) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(usize, String)> = Vec::new();

    for record in records {
        let mut candidates = vec![record.scientific_name.as_str()];
        if let Some(ref common) = record.common_name {
            candidates.push(common.as_str());
        }

        for candidate in candidates {
            let distance = strsim::levenshtein(&query, &candidate.to_lowercase());
            if distance > 0 && distance <= 3 {
                scored.push((distance, candidate.to_string()));
            }
        }
    }

    scored.sort();
    scored.dedup_by(|a, b| a.1 == b.1);
    scored.truncate(3);
    scored.into_iter().map(|(_, name)| name).collect()
}

/// Display results in non-interactive mode
fn display_non_interactive(
    matches: &[SpeciesRecord],
    format: &str,
    limit: usize,
    page: usize,
) -> Result<()> {
    match format {
        "compact" => display_compact(paginate(matches, limit, page)),
        "json" => display_json(paginate(matches, limit, page)),
        _ => display_table(matches, limit, page),
    }
}

/// Display results in compact format (one per line)
fn display_compact(page_records: &[SpeciesRecord]) -> Result<()> {
    for record in page_records {
        println!(
            "{}\t{}\t{}",
            record.scientific_name,
            record.common_name.as_deref().unwrap_or("-"),
            record.category
        );
    }
    Ok(())
}

/// Display results in JSON format
fn display_json(page_records: &[SpeciesRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(page_records)?;
    println!("{}", json);
    Ok(())
}

/// Display results in table format
fn display_table(matches: &[SpeciesRecord], limit: usize, page: usize) -> Result<()> {
    let page_records = paginate(matches, limit, page);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Name", "Scientific Name", "Group", "Status"]);

    for record in page_records {
        table.add_row(vec![
            truncate_string(record.display_title(), 40),
            record.scientific_name.clone(),
            class_group(&record.class),
            status_label(&record.category),
        ]);
    }

    println!();
    println!("{}", table);
    println!();
    println!(
        "Showing {} of {} results (page {}/{})",
        page_records.len(),
        matches.len(),
        page,
        total_pages(matches.len(), limit)
    );

    Ok(())
}

/// Display results with the interactive picker
async fn display_interactive(
    matches: Vec<SpeciesRecord>,
    limit: usize,
    start_page: usize,
    config: &Config,
) -> Result<()> {
    use inquire::Select;

    // One context for the whole session: repeated detail views hit the cache
    let context = DetailContext::new(config)?;
    let mut page = start_page.min(total_pages(matches.len(), limit));

    loop {
        let page_records = paginate(&matches, limit, page);
        println!();
        println!(
            "{} Found {} species (page {}/{})",
            "*".green(),
            matches.len(),
            page,
            total_pages(matches.len(), limit)
        );

        let mut options: Vec<String> = page_records
            .iter()
            .map(format_pick_option)
            .collect();
        if page > 1 {
            options.push("<- Previous page".yellow().to_string());
        }
        if page < total_pages(matches.len(), limit) {
            options.push("-> Next page".yellow().to_string());
        }
        options.push("x Exit".red().to_string());

        let selection = Select::new("Select a species:", options.clone())
            .with_page_size(15)
            .prompt();

        match selection {
            Ok(selected) => {
                if selected.contains("x Exit") {
                    break;
                } else if selected.contains("<- Previous page") {
                    page -= 1;
                } else if selected.contains("-> Next page") {
                    page += 1;
                } else if let Some(index) = options.iter().position(|o| o == &selected) {
                    if index < page_records.len() {
                        render_detail(&page_records[index], &context).await;
                    }
                }
            },
            Err(_) => break, // cancelled with Ctrl+C or ESC
        }
    }

    Ok(())
}

fn format_pick_option(record: &SpeciesRecord) -> String {
    let status = status_label(&record.category);
    let status = match Category::from_code(&record.category).map(|c| c.tier()) {
        Some(AlertTier::Critical) => status.red().to_string(),
        Some(AlertTier::Elevated) => status.yellow().to_string(),
        _ => status.green().to_string(),
    };

    if record.has_common_name() {
        format!(
            "{} ({}) - {}",
            truncate_string(record.display_title(), 40).cyan(),
            record.scientific_name,
            status
        )
    } else {
        format!("{} - {}", record.scientific_name.cyan(), status)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis.
/// Counts chars rather than bytes; vernacular names are not ASCII-only.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
