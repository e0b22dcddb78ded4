//! Glossary loading and validation.
//!
//! A glossary maps medical terms to plain-language definitions. It is loaded
//! fresh for every document and never cached across requests.

mod entry;
mod store;

pub use entry::{Glossary, GlossaryEntry};
pub use store::{EntryPolicy, GlossaryConfig, GlossaryStore};
