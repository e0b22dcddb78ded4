//! Fuzz target for the glossary loader.
//!
//! The loader must return an error, never panic, on any input text, under
//! both entry policies.

#![no_main]

use eligible::{EntryPolicy, GlossaryConfig, GlossaryStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(json) = std::str::from_utf8(data) {
        let _ = GlossaryStore::new().load_str(json);
        let _ = GlossaryStore::with_config(
            GlossaryConfig::new().with_policy(EntryPolicy::SkipInvalid),
        )
        .load_str(json);
    }
});
