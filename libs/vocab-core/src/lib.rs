//! Core library for the vocabulary map data pipeline.
//!
//! Provides:
//! - Markdown flashcard parser and its composer inverse
//! - Character reference index built from breakdown descriptions
//! - Greedy longest-match segmenter/linker for Chinese text
//! - Batch restructuring of raw `headword -> markdown` dictionaries
//!
//! Everything here is synchronous and pure: callers hand in materialized
//! strings and lookup oracles, and malformed content degrades to empty
//! defaults instead of errors.

pub mod batch;
pub mod charindex;
pub mod composer;
pub mod error;
pub mod parser;
pub mod segmenter;
pub mod types;

pub use batch::{restructure, BatchResult};
pub use charindex::CharacterIndex;
pub use composer::{compose_dictionary, compose_entry};
pub use error::{BatchError, Result};
pub use parser::parse_entry;
pub use segmenter::{link_words, segment, Lexicon, Token};
pub use types::VocabularyEntry;
