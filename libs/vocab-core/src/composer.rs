//! Canonical markdown rendering for structured vocabulary records.
//!
//! The composer is the inverse of [`crate::parser::parse_entry`]: feeding
//! its output back through the parser reproduces the record field for
//! field. Arbitrary hand-written markdown is not guaranteed to survive a
//! compose-parse cycle byte-identically; only composer output is.

use std::collections::BTreeMap;

use crate::types::VocabularyEntry;

/// Render one record as canonical flashcard markdown.
///
/// The title uses the emphasized-pair layout (`# **词 (cí)** - word`);
/// sections appear in fixed order with entries joined by markdown hard
/// line breaks, and empty sections are omitted entirely.
pub fn compose_entry(headword: &str, entry: &VocabularyEntry) -> String {
    let mut blocks = vec![format!(
        "# **{} ({})** - {}",
        headword, entry.pinyin, entry.english
    )];

    let sections: [(&str, &[String]); 4] = [
        ("Character Breakdown", &entry.character_breakdown),
        ("Examples", &entry.examples),
        ("Usage Notes", &entry.usage_notes),
        ("Memory Aids", &entry.memory_aids),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        blocks.push(format!("**{}**:\n{}", title, items.join("  \n")));
    }

    blocks.join("\n\n")
}

/// Render every record of a restructured dictionary back to markdown.
pub fn compose_dictionary(
    entries: &BTreeMap<String, VocabularyEntry>,
) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(headword, entry)| (headword.clone(), compose_entry(headword, entry)))
        .collect()
}
