//! Text transformation stages applied to each eligibility unit.
//!
//! Stages run in a fixed order:
//! 1. [`TermSubstitutor`] swaps glossary terms for their definitions
//! 2. [`QuestionRewriter`] turns statements into direct questions

mod rewrite;
mod substitute;

pub use rewrite::{QuestionRewriter, RewriteRule, RulePattern};
pub use substitute::TermSubstitutor;
