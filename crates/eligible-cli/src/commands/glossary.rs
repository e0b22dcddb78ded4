//! Glossary command - validate a glossary file and inspect its entries.

use std::path::PathBuf;

use colored::Colorize;
use eligible::{EntryPolicy, GlossaryConfig, GlossaryStore};

pub fn run(
    file: PathBuf,
    skip_invalid: bool,
    lookup: Option<String>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let policy = if skip_invalid {
        EntryPolicy::SkipInvalid
    } else {
        EntryPolicy::Strict
    };
    let glossary =
        GlossaryStore::with_config(GlossaryConfig::new().with_policy(policy)).load_file(&file)?;

    if let Some(term) = lookup {
        let entry = glossary
            .get(&term)
            .ok_or_else(|| format!("Term not in glossary: {}", term))?;

        if json_output {
            println!("{}", serde_json::to_string_pretty(entry)?);
        } else {
            println!("{} {}", format!("{}:", entry.term).cyan().bold(), entry.definition);
        }
        return Ok(());
    }

    if json_output {
        let status = serde_json::json!({
            "file": file.display().to_string(),
            "valid": true,
            "terms": glossary.len(),
            "skipped": glossary.skipped(),
            "definitions": glossary.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Glossary".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    let width = glossary.iter().map(|e| e.term.len()).max().unwrap_or(0);
    for entry in &glossary {
        let term = format!("{:width$}", entry.term, width = width);
        println!("  {}  {}", term.yellow(), entry.definition);
    }

    println!();
    println!(
        "{} {} terms",
        "Valid:".green().bold(),
        glossary.len().to_string().white().bold()
    );
    if glossary.skipped() > 0 {
        println!(
            "{} {} malformed entries",
            "Skipped".yellow().bold(),
            glossary.skipped()
        );
    }

    Ok(())
}
