//! CLI command implementations.

pub mod generate;
pub mod glossary;
pub mod segment;

use std::fs;
use std::io::Read;

use crate::cli::ContentInput;

/// Read criteria text from `--content`, `--text`, or stdin.
pub(crate) fn read_content(input: &ContentInput) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref text) = input.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = input.content {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
