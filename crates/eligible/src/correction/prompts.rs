//! Prompt templates for LLM-backed correction.

/// System prompt for grammar correction.
pub fn system_prompt() -> &'static str {
    "You are a careful copy editor for patient-facing clinical trial screening surveys. \
     You fix spelling and grammar so each question reads naturally in plain English. \
     You never add, remove, or change medical facts, and you never answer the question."
}

/// Build a prompt asking for a corrected version of one question.
pub fn correction_prompt(text: &str) -> String {
    format!(
        r#"Correct the grammar and spelling of this yes/no screening question.

## Question
{}

## Rules
- Keep it a single question addressed to the reader ("you").
- Keep every medical term and number exactly as written.
- Do not add "(Yes/No)" or any numbering.

Respond with the corrected question only, no explanation."#,
        text
    )
}

/// Strip code fences and wrapping quotes an LLM may add around its answer.
pub fn clean_response(response: &str) -> String {
    let mut text = response.trim();

    if let Some(inner) = text.strip_prefix("```") {
        let inner = inner.split_once('\n').map_or(inner, |(_, rest)| rest);
        text = inner.strip_suffix("```").unwrap_or(inner).trim();
    }

    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = text[1..text.len() - 1].trim();
        }
    }

    text.to_string()
}
