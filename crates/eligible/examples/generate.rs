//! Generate a screening survey from a glossary and a criteria file.
//!
//! Usage:
//!   cargo run --example generate -- <glossary.json> <criteria.txt>

use std::env;
use std::fs;
use std::process;

use eligible::{GlossaryStore, IdentityCorrector, SurveyBuilder};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example generate -- <glossary.json> <criteria.txt>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example generate -- glossary.json hiv_trial.txt");
        process::exit(1);
    }

    let glossary = match GlossaryStore::new().load_file(&args[1]) {
        Ok(glossary) => glossary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let content = match fs::read_to_string(&args[2]) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args[2], e);
            process::exit(1);
        }
    };

    println!("Glossary: {} terms", glossary.len());
    println!();

    let builder = SurveyBuilder::new(IdentityCorrector::new());
    match builder.build(&content, &glossary) {
        Ok(survey) => {
            for line in survey.render() {
                println!("{}", line);
            }
            println!();
            println!(
                "{} questions ({} blank segments dropped)",
                survey.len(),
                survey.summary.segments_dropped
            );
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.stage(), e);
            process::exit(1);
        }
    }
}
