//! Heuristic statement-to-question rewriting.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::trace;

use crate::error::Result;
use crate::text::{is_word_char, replace_whole_word};

// =============================================================================
// FIXED RULES
// =============================================================================
// Case-sensitive: only the lowercase verb "have" directly followed by
// "current" or "severe". The leading boundary is checked with `is_word_char`
// so all rules agree on what a word is.

static HAVE_CURRENT_OR_SEVERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"have\s(?:current|severe)\s").unwrap());

/// How a rewrite rule finds the text it replaces.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// Whole-word, case-insensitive literal.
    WholeWord(String),
    /// Regular expression, matched as written.
    Regex(Regex),
    /// Regular expression that only matches at the start of a word.
    WordStart(Regex),
}

/// A single heuristic replacement.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Short identifier used in logs.
    pub name: String,
    /// What to look for.
    pub pattern: RulePattern,
    /// Literal replacement text (`$` is not expanded).
    pub replacement: String,
}

impl RewriteRule {
    /// Rule replacing a whole word, ignoring case.
    pub fn whole_word(
        name: impl Into<String>,
        word: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: RulePattern::WholeWord(word.into()),
            replacement: replacement.into(),
        }
    }

    /// Rule replacing every match of a regular expression.
    pub fn pattern(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: RulePattern::Regex(Regex::new(pattern)?),
            replacement: replacement.into(),
        })
    }

    /// Apply the rule, borrowing the input when nothing matches.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            RulePattern::WholeWord(word) => replace_whole_word(text, word, &self.replacement),
            RulePattern::Regex(regex) => regex.replace_all(text, NoExpand(&self.replacement)),
            RulePattern::WordStart(regex) => replace_at_word_start(text, regex, &self.replacement),
        }
    }
}

fn replace_at_word_start<'a>(text: &'a str, regex: &Regex, replacement: &str) -> Cow<'a, str> {
    let mut out = String::new();
    let mut last = 0;
    let mut replaced = false;

    for m in regex.find_iter(text) {
        let after_word = text[..m.start()].chars().next_back().is_some_and(is_word_char);
        if after_word {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(replacement);
        last = m.end();
        replaced = true;
    }

    if !replaced {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Turns third-person eligibility statements into second-person questions.
///
/// The built-in rules run in this order, each over the previous output:
///
/// 1. `individuals` → `Do you`
/// 2. `diagnosis` → `Have you been diagnosed with`
/// 3. `have current ` / `have severe ` → `Do you currently have `
///
/// Extra rules added with [`with_rule`](Self::with_rule) run after these.
#[derive(Debug, Clone)]
pub struct QuestionRewriter {
    rules: Vec<RewriteRule>,
}

impl QuestionRewriter {
    /// Create a rewriter with the built-in rules.
    pub fn new() -> Self {
        let rules = vec![
            RewriteRule::whole_word("individuals", "individuals", "Do you"),
            RewriteRule::whole_word("diagnosis", "diagnosis", "Have you been diagnosed with"),
            RewriteRule {
                name: "have-current-or-severe".to_string(),
                pattern: RulePattern::WordStart(HAVE_CURRENT_OR_SEVERE.clone()),
                replacement: "Do you currently have ".to_string(),
            },
        ];
        Self { rules }
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Apply every rule in order.
    pub fn rewrite(&self, text: &str) -> String {
        let mut current = text.to_string();

        for rule in &self.rules {
            let replaced = match rule.apply(&current) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            trace!(rule = %rule.name, "Rewrite rule fired");
            current = replaced;
        }

        current
    }
}

impl Default for QuestionRewriter {
    fn default() -> Self {
        Self::new()
    }
}
