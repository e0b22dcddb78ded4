//! Segment command - show the eligibility units extracted from criteria text.

use colored::Colorize;
use eligible::segment;

use crate::cli::ContentInput;

use super::read_content;

pub fn run(
    input: ContentInput,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_content(&input)?;
    let units = segment(&content);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&units)?);
        return Ok(());
    }

    if units.is_empty() {
        println!("{}", "No eligibility units found.".yellow());
        return Ok(());
    }

    for unit in &units {
        println!(
            "{:>3}  {}",
            unit.position.to_string().cyan().bold(),
            unit.text
        );
    }
    println!();
    println!("{} units", units.len().to_string().white().bold());

    Ok(())
}
