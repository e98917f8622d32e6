use std::collections::HashMap;
use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Manifest, ManifestEntry};

/// Render a colored summary of a finished run.
///
/// Dependencies without a license or without license files are always
/// listed; `verbose` lists every dependency.
pub fn render(manifest: &Manifest, output_dir: &Path, verbose: bool, quiet: bool) {
    let total = manifest.entries().count();
    let incomplete = manifest.entries().filter(|(_, e)| e.is_incomplete()).count();
    let copied: usize = manifest
        .entries()
        .map(|(_, e)| e.license_files.len())
        .sum();

    if quiet {
        println!(
            "Dependencies: {}  License files: {}  Incomplete: {}",
            total,
            copied.to_string().green(),
            incomplete.to_string().yellow(),
        );
        return;
    }

    println!(
        "\n {} v{}",
        "license-collector".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Project: {}", manifest.project_name);
    println!(
        " Output:  {}\n",
        output_dir.join(manifest.file_name()).display()
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    for (manager, entries) in &manifest.dependency_managers {
        println!(
            " │  {:<48} │",
            format!("{:<20} : {:>4} dependencies", manager, entries.len())
        );
    }
    println!(" │  {:<48} │", format!("License files copied : {:>4}", copied));
    println!(
        " │  {:<48} │",
        format!("{}  Incomplete         : {:>4}", "⚠".yellow(), incomplete)
    );
    println!(" │  {:<48} │", summarize_licenses(manifest));
    println!(" └────────────────────────────────────────────────────┘\n");

    if incomplete > 0 {
        println!(
            " {} Dependencies missing a license or license files:\n",
            "[WARN]".yellow().bold()
        );
        render_table(manifest, |e| e.is_incomplete());
        println!();
    }

    if verbose && total > incomplete {
        println!(" {} All collected dependencies:\n", "[OK]".green().bold());
        render_table(manifest, |e| !e.is_incomplete());
        println!();
    }
}

fn render_table(manifest: &Manifest, filter: impl Fn(&ManifestEntry) -> bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Manager").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
        ]);

    for (manager, entry) in manifest.entries().filter(|(_, e)| filter(e)) {
        let license = match &entry.license {
            Some(license) => Cell::new(license),
            None => Cell::new("missing").fg(Color::Yellow),
        };
        let files = if entry.license_files.is_empty() {
            Cell::new("none").fg(Color::Yellow)
        } else {
            Cell::new(entry.license_files.len())
        };

        table.add_row(vec![
            Cell::new(manager),
            Cell::new(&entry.name),
            Cell::new(&entry.version),
            license,
            files,
        ]);
    }

    println!("{}", table);
}

/// Three most common licenses, e.g. `[MIT (12), Apache-2.0 (4), null (1)]`.
fn summarize_licenses(manifest: &Manifest) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, entry) in manifest.entries() {
        let lic = entry.license.as_deref().unwrap_or("null");
        *counts.entry(lic).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(lic, cnt)| format!("{} ({})", lic, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
