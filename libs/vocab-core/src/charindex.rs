//! Character reference index built from breakdown descriptions.
//!
//! While a dictionary is being restructured, every breakdown description
//! that starts with a `**字 (zì)**:` prefix contributes its character to a
//! shared index. The first description seen for a character is kept for
//! good; later duplicates are ignored. Descriptions without the prefix
//! shape are skipped silently.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::VocabularyEntry;

lazy_static! {
    // `- **字 (zì)**: ...` with the bullet optional.
    static ref DESCRIPTION_PREFIX: Regex =
        Regex::new(r"^(?:- *)?\*\*([^*(\r\n]+?) *\(([^)\r\n]+)\)\*\*:").unwrap();
}

/// Write-once-per-key map from character to its first-seen breakdown
/// description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterIndex {
    map: BTreeMap<String, String>,
}

impl CharacterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one breakdown description. A description whose prefix does
    /// not parse is ignored; a character already present keeps its
    /// original description.
    pub fn record(&mut self, description: &str) {
        if let Some(token) = description_token(description) {
            self.map
                .entry(token)
                .or_insert_with(|| description.to_string());
        }
    }

    /// Index every breakdown description of one entry, in order.
    pub fn absorb(&mut self, entry: &VocabularyEntry) {
        for description in &entry.character_breakdown {
            self.record(description);
        }
    }

    pub fn get(&self, character: &str) -> Option<&str> {
        self.map.get(character).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Pull the character token out of a `**字 (zì)**:`-shaped prefix.
fn description_token(description: &str) -> Option<String> {
    DESCRIPTION_PREFIX
        .captures(description.trim_start())
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_character_from_bulleted_description() {
        let mut index = CharacterIndex::new();
        index.record("- **火 (huǒ)**: fire; flame");
        assert_eq!(index.get("火"), Some("- **火 (huǒ)**: fire; flame"));
    }

    #[test]
    fn records_character_without_bullet() {
        let mut index = CharacterIndex::new();
        index.record("**柴 (chái)**: firewood");
        assert_eq!(index.get("柴"), Some("**柴 (chái)**: firewood"));
    }

    #[test]
    fn first_writer_wins() {
        let mut index = CharacterIndex::new();
        index.record("- **火 (huǒ)**: fire");
        index.record("- **火 (huǒ)**: flame, the second definition");
        assert_eq!(index.get("火"), Some("- **火 (huǒ)**: fire"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn malformed_descriptions_are_skipped() {
        let mut index = CharacterIndex::new();
        index.record("just prose with no bold prefix");
        index.record("- 火: bold markers missing");
        index.record("");
        assert!(index.is_empty());
    }

    #[test]
    fn absorbs_a_whole_entry_in_order() {
        let entry = VocabularyEntry {
            character_breakdown: vec![
                "- **你 (nǐ)**: you".to_string(),
                "- **好 (hǎo)**: good".to_string(),
                "not indexable".to_string(),
            ],
            ..Default::default()
        };
        let mut index = CharacterIndex::new();
        index.absorb(&entry);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("你"), Some("- **你 (nǐ)**: you"));
        assert_eq!(index.get("好"), Some("- **好 (hǎo)**: good"));
    }

    #[test]
    fn multi_line_description_keeps_full_text() {
        let mut index = CharacterIndex::new();
        index.record("- **们 (men)**: plural suffix\n    from 人 (person)");
        assert_eq!(
            index.get("们"),
            Some("- **们 (men)**: plural suffix\n    from 人 (person)")
        );
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let mut index = CharacterIndex::new();
        index.record("- **火 (huǒ)**: fire");
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"火":"- **火 (huǒ)**: fire"}"#);
    }
}
