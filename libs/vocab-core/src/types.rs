//! Core types for the vocabulary data pipeline.

use serde::{Deserialize, Serialize};

/// Structured record extracted from one flashcard's markdown.
///
/// The record is keyed externally by its headword (the Chinese word it
/// describes); nothing inside the record identifies it. Parsing is pure:
/// the same markdown always yields an equal record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// Romanized pronunciation; empty when the title line matched no
    /// known layout.
    pub pinyin: String,
    /// Short English gloss; empty on a title miss.
    pub english: String,
    /// One element per breakdown bullet block. Multi-line blocks keep
    /// their internal lines joined by `\n` with indentation preserved.
    #[serde(default)]
    pub character_breakdown: Vec<String>,
    /// Bullet lines (`- ` prefixed, trimmed) from the Examples section.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Non-blank lines from the Usage Notes section, trimmed.
    #[serde(default)]
    pub usage_notes: Vec<String>,
    /// Non-blank lines from the Memory Aids section, trimmed.
    #[serde(default)]
    pub memory_aids: Vec<String>,
}

impl VocabularyEntry {
    /// True when no field carries any content, i.e. the source markdown
    /// matched nothing at all.
    pub fn is_empty(&self) -> bool {
        self.pinyin.is_empty()
            && self.english.is_empty()
            && self.character_breakdown.is_empty()
            && self.examples.is_empty()
            && self.usage_notes.is_empty()
            && self.memory_aids.is_empty()
    }
}
