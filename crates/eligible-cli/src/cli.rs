//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Eligible: plain-language screening surveys from trial eligibility criteria
#[derive(Parser)]
#[command(name = "eligible")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a yes/no screening survey from eligibility criteria
    Generate {
        /// Glossary file (JSON with a "definitions" list)
        #[arg(short, long, value_name = "FILE")]
        glossary: PathBuf,

        #[command(flatten)]
        input: ContentInput,

        /// Grammar corrector to use
        #[arg(long, default_value = "none")]
        corrector: CorrectorChoice,

        /// Language code for the corrector (e.g., "en-US", "en-GB")
        #[arg(long)]
        language: Option<String>,

        /// Model to use with the ollama corrector (e.g., "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature for the ollama corrector (0.0-1.0)
        #[arg(long)]
        temperature: Option<f64>,

        /// Skip malformed glossary entries instead of failing
        #[arg(long)]
        skip_invalid: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a glossary file and show its entries
    Glossary {
        /// Glossary file (JSON with a "definitions" list)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Skip malformed entries instead of failing
        #[arg(long)]
        skip_invalid: bool,

        /// Show the definition of a single term
        #[arg(short, long)]
        lookup: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how criteria text is split into eligibility units
    Segment {
        #[command(flatten)]
        input: ContentInput,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where eligibility criteria text comes from (stdin when neither is given).
#[derive(Args, Clone, Debug)]
#[group(multiple = false)]
pub struct ContentInput {
    /// File containing eligibility criteria text
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Eligibility criteria text given inline
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Grammar corrector choice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorrectorChoice {
    /// No correction - text is passed through unchanged
    #[default]
    None,
    /// LanguageTool server (LANGUAGETOOL_URL, default http://localhost:8010)
    LanguageTool,
    /// Ollama local models (requires Ollama running)
    Ollama,
    /// Mock corrector for testing
    Mock,
}

impl std::str::FromStr for CorrectorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "identity" => Ok(CorrectorChoice::None),
            "languagetool" | "lt" => Ok(CorrectorChoice::LanguageTool),
            "ollama" | "local" => Ok(CorrectorChoice::Ollama),
            "mock" | "test" => Ok(CorrectorChoice::Mock),
            _ => Err(format!(
                "Unknown corrector: {}. Use: none, languagetool, ollama, or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for CorrectorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectorChoice::None => write!(f, "none"),
            CorrectorChoice::LanguageTool => write!(f, "languagetool"),
            CorrectorChoice::Ollama => write!(f, "ollama"),
            CorrectorChoice::Mock => write!(f, "mock"),
        }
    }
}
