//! Batch restructuring of a raw markdown dictionary.
//!
//! One pass over a `headword -> markdown` JSON object produces the
//! structured record for every entry plus the shared character reference
//! index. The pass never aborts on a bad entry: values that are not
//! strings are skipped and reported back by key, and markdown that matches
//! nothing simply parses to an empty record.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::charindex::CharacterIndex;
use crate::error::{BatchError, Result};
use crate::parser::parse_entry;
use crate::types::VocabularyEntry;

/// Output of one restructuring pass.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Structured record per headword, non-string inputs excluded.
    pub entries: BTreeMap<String, VocabularyEntry>,
    /// Character reference index accumulated across all entries, in the
    /// input object's iteration order.
    pub character_index: CharacterIndex,
    /// Keys whose values were not strings, in input order.
    pub skipped: Vec<String>,
}

/// Restructure a raw dictionary parsed from JSON.
///
/// The root must be a JSON object; that is the only hard failure. Each
/// string value is parsed into a [`VocabularyEntry`] and feeds the
/// character index; anything else is skipped.
pub fn restructure(raw: &Value) -> Result<BatchResult> {
    let object = raw.as_object().ok_or(BatchError::NotAnObject {
        found: json_type_name(raw),
    })?;

    let mut result = BatchResult::default();
    for (headword, value) in object {
        match value {
            Value::String(markdown) => {
                let entry = parse_entry(markdown);
                result.character_index.absorb(&entry);
                result.entries.insert(headword.clone(), entry);
            }
            _ => result.skipped.push(headword.clone()),
        }
    }
    Ok(result)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
