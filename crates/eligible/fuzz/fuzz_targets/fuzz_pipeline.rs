//! Fuzz target for the survey pipeline.
//!
//! Splits the input into a glossary term and criteria text, then checks that
//! segmentation, substitution and rewriting never panic and that question
//! indices stay contiguous.

#![no_main]

use eligible::{Glossary, GlossaryEntry, IdentityCorrector, SurveyBuilder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let (term, content) = text.split_once('\n').unwrap_or(("", text));
    let glossary = Glossary::from_entries(vec![GlossaryEntry::new(term, "plain words")])
        .unwrap_or_default();

    let builder = SurveyBuilder::new(IdentityCorrector::new());
    if let Ok(survey) = builder.build(content, &glossary) {
        for (i, question) in survey.questions.iter().enumerate() {
            assert_eq!(question.index, i + 1);
        }
    }
});
