//! Generate command - build a screening survey from eligibility criteria.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use eligible::{
    CorrectorConfig, EntryPolicy, GlossaryConfig, IdentityCorrector, LanguageToolCorrector,
    MockCorrector, OllamaCorrector, Survey, SurveyBuilder, SurveyConfig,
};
use tracing::debug;

use crate::cli::{ContentInput, CorrectorChoice};

use super::read_content;

/// Arguments of the generate command.
pub struct GenerateArgs {
    pub glossary: PathBuf,
    pub input: ContentInput,
    pub corrector: CorrectorChoice,
    pub language: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub skip_invalid: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.glossary.exists() {
        return Err(format!("Glossary not found: {}", args.glossary.display()).into());
    }

    let policy = if args.skip_invalid {
        EntryPolicy::SkipInvalid
    } else {
        EntryPolicy::Strict
    };
    let config = SurveyConfig::new().with_glossary(GlossaryConfig::new().with_policy(policy));
    let builder = make_builder(&args, config)?;
    debug!(corrector = builder.corrector_name(), "Builder ready");

    // Fresh glossary for this document
    let glossary = builder.glossary_store().load_file(&args.glossary)?;
    let content = read_content(&args.input)?;

    if !args.json {
        eprintln!(
            "{} {} glossary terms, corrector: {}",
            "Loaded".cyan().bold(),
            glossary.len().to_string().white().bold(),
            builder.corrector_name()
        );
        if glossary.skipped() > 0 {
            eprintln!(
                "{} {} malformed glossary entries",
                "Skipped".yellow().bold(),
                glossary.skipped()
            );
        }
    }

    let survey = builder
        .build(&content, &glossary)
        .map_err(|e| format!("{} stage: {}", e.stage(), e))?;

    let rendered = if args.json {
        serde_json::to_string_pretty(&survey)? + "\n"
    } else {
        survey.to_string()
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, &rendered)?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        None if args.json => print!("{}", rendered),
        None => print_survey(&survey),
    }

    if verbose && !args.json {
        eprintln!();
        eprintln!(
            "{} segments, {} dropped as blank, source {}",
            survey.summary.segments_found,
            survey.summary.segments_dropped,
            survey.source_hash
        );
    }

    Ok(())
}

fn make_builder(
    args: &GenerateArgs,
    config: SurveyConfig,
) -> Result<SurveyBuilder, Box<dyn std::error::Error>> {
    let builder = match args.corrector {
        CorrectorChoice::None => SurveyBuilder::with_config(IdentityCorrector::new(), config),
        CorrectorChoice::Mock => SurveyBuilder::with_config(MockCorrector::new(), config),
        CorrectorChoice::LanguageTool => {
            let corrector = match args.language {
                Some(ref language) => {
                    let mut corrector_config = CorrectorConfig::default().with_language(language);
                    if let Ok(url) = std::env::var("LANGUAGETOOL_URL") {
                        corrector_config = corrector_config.with_api_url(url);
                    }
                    LanguageToolCorrector::with_config(corrector_config)?
                }
                None => LanguageToolCorrector::from_env()?,
            };
            SurveyBuilder::with_config(corrector, config)
        }
        CorrectorChoice::Ollama => {
            let mut corrector_config = CorrectorConfig::default().with_timeout_secs(120);
            if let Some(ref model) = args.model {
                corrector_config = corrector_config.with_model(model);
            }
            if let Some(temperature) = args.temperature {
                corrector_config = corrector_config.with_temperature(temperature);
            }
            SurveyBuilder::with_config(OllamaCorrector::with_config(corrector_config)?, config)
        }
    };
    Ok(builder)
}

fn print_survey(survey: &Survey) {
    println!();
    for question in &survey.questions {
        println!(
            "{} {} {}",
            format!("Question {}:", question.index).cyan().bold(),
            question.text,
            "(Yes/No)".dimmed()
        );
    }
    println!();
    println!(
        "Generated {} questions",
        survey.len().to_string().white().bold()
    );
}
