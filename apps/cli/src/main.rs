//! Offline data preparation for the vocabulary map.
//!
//! `restructure` turns the raw `headword -> markdown` dictionary into the
//! structured records the map client consumes, `compose` renders records
//! back to canonical markdown, and `link` annotates a text file against a
//! word list. All of it is plain synchronous file-in/file-out work; the
//! interesting logic lives in `vocab-core`.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_core::{compose_dictionary, link_words, restructure, VocabularyEntry};

#[derive(Parser)]
#[command(
    name = "vocab-tools",
    about = "Offline data preparation for the vocabulary map"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a raw headword -> markdown dictionary into structured records
    Restructure {
        /// Raw dictionary JSON (headword -> markdown)
        #[arg(long)]
        input: PathBuf,
        /// Structured records JSON to write
        #[arg(long)]
        output: PathBuf,
        /// Also write the character reference index here
        #[arg(long)]
        char_index: Option<PathBuf>,
    },
    /// Render structured records back to canonical markdown
    Compose {
        /// Structured records JSON
        #[arg(long)]
        input: PathBuf,
        /// Markdown dictionary JSON to write
        #[arg(long)]
        output: PathBuf,
    },
    /// Wrap known words in a text file with anchor markup
    Link {
        /// Text file to annotate
        #[arg(long)]
        input: PathBuf,
        /// Word list JSON: an array of words, or an object keyed by word
        #[arg(long)]
        words: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Command::Restructure {
            input,
            output,
            char_index,
        } => run_restructure(&input, &output, char_index.as_deref()),
        Command::Compose { input, output } => run_compose(&input, &output),
        Command::Link {
            input,
            words,
            output,
        } => run_link(&input, &words, output.as_deref()),
    }
}

fn run_restructure(input: &Path, output: &Path, char_index: Option<&Path>) -> Result<()> {
    let raw: Value = read_json(input)?;
    let result = restructure(&raw)?;

    for key in &result.skipped {
        tracing::warn!(%key, "skipping entry with non-string markdown");
    }
    tracing::info!(
        entries = result.entries.len(),
        characters = result.character_index.len(),
        skipped = result.skipped.len(),
        "restructured dictionary"
    );

    write_json(output, &result.entries)?;
    if let Some(path) = char_index {
        write_json(path, &result.character_index)?;
    }
    Ok(())
}

fn run_compose(input: &Path, output: &Path) -> Result<()> {
    let entries: BTreeMap<String, VocabularyEntry> = read_json(input)?;
    let raw = compose_dictionary(&entries);
    tracing::info!(entries = raw.len(), "composed markdown dictionary");
    write_json(output, &raw)
}

fn run_link(input: &Path, words: &Path, output: Option<&Path>) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let value: Value = read_json(words)?;
    let lexicon = word_list(value)
        .with_context(|| format!("{} must hold a JSON array or object", words.display()))?;

    let linked = link_words(&text, &lexicon, |word| {
        format!(r##"<a href="#{word}" data-word="{word}">{word}</a>"##)
    });
    tracing::info!(words = lexicon.len(), bytes = linked.len(), "linked text");

    match output {
        Some(path) => std::fs::write(path, linked)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{linked}"),
    }
    Ok(())
}

/// A word list is either a JSON array of words or an object whose keys are
/// the words (the node-map form the vocabulary graph is exported in).
fn word_list(value: Value) -> Option<HashSet<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(word) => Some(word),
                    _ => None,
                })
                .collect(),
        ),
        Value::Object(map) => Some(map.into_iter().map(|(word, _)| word).collect()),
        _ => None,
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
