//! Markdown parser for vocabulary flashcards.
//!
//! # Format
//! ```markdown
//! # **亲爱 (qīn'ài)** - Dear; beloved
//!
//! **Character Breakdown**:
//! - **亲 (qīn)**: close; dear
//! - **爱 (ài)**: love
//!
//! **Examples**:
//! - 亲爱的朋友。 - Dear friend.
//!
//! **Usage Notes**:
//! Often paired with 的.
//!
//! **Memory Aids**:
//! Love that stays close to the heart.
//! ```
//!
//! Source decks were authored by hand over a long period, so the title line
//! appears in several layouts (pronunciation inside or outside the emphasis
//! run, with or without a space before the parenthesis, gloss inside or
//! outside the closing `**`). Parsing never fails: a field whose pattern does
//! not match is returned as its empty default.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::VocabularyEntry;

lazy_static! {
    // The five title layouts, in the order they are tried. The separator
    // between pronunciation and gloss is a hyphen or an en-dash in all of
    // them.
    static ref TITLE_EMPHASIZED_PAIR: Regex =
        Regex::new(r"(?m)^#+ *\*\*(?:[^*()\r\n]+) \(([^)\r\n]+)\)\*\* *[-–] *(.+)$").unwrap();
    static ref TITLE_PLAIN_PRONUNCIATION: Regex =
        Regex::new(r"(?m)^#+ *\*\*(?:[^*\r\n]+?)\*\* *\(([^)\r\n]+)\) *[-–] *(.+)$").unwrap();
    static ref TITLE_GLOSS_IN_EMPHASIS: Regex =
        Regex::new(r"(?m)^#+ *\*\*(?:[^*()\r\n]+) \(([^)\r\n]+)\) *[-–] *([^*\r\n]+?)\*\*").unwrap();
    static ref TITLE_GLOSS_IN_EMPHASIS_TIGHT: Regex =
        Regex::new(r"(?m)^#+ *\*\*(?:[^*()\r\n]+)\(([^)\r\n]+)\) *[-–] *([^*\r\n]+?)\*\*").unwrap();
    static ref TITLE_EMPHASIZED_PAIR_TIGHT: Regex =
        Regex::new(r"(?m)^#+ *\*\*(?:[^*()\r\n]+)\(([^)\r\n]+)\)\*\* *[-–] *(.+)$").unwrap();

    // Section headers tolerate a colon inside or outside the emphasis run,
    // or no colon at all.
    static ref BREAKDOWN_HEADER: Regex =
        Regex::new(r"\*\*Character Breakdown:?(?:\*\*)?:?").unwrap();
    static ref EXAMPLES_HEADER: Regex =
        Regex::new(r"\*\*Examples:?(?:\*\*)?:?").unwrap();
    static ref USAGE_NOTES_HEADER: Regex =
        Regex::new(r"\*\*Usage Notes:?(?:\*\*)?:?").unwrap();
    static ref MEMORY_AIDS_HEADER: Regex =
        Regex::new(r"\*\*Memory Aids:?(?:\*\*)?:?").unwrap();

    // The Examples block ends at the first blank-line-prefixed later header.
    static ref EXAMPLES_TERMINATOR: Regex =
        Regex::new(r"\n\n\*\*(?:Usage Notes|Memory Aids)").unwrap();
}

/// Pronunciation and gloss pulled from a title line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TitleMatch {
    pinyin: String,
    english: String,
}

/// Parse one flashcard's markdown into a structured record.
///
/// Never fails; every unmatched pattern yields that field's empty default.
pub fn parse_entry(markdown: &str) -> VocabularyEntry {
    let (pinyin, english) = match match_title(markdown) {
        Some(title) => (title.pinyin, title.english),
        None => (String::new(), String::new()),
    };

    VocabularyEntry {
        pinyin,
        english,
        character_breakdown: extract_character_breakdown(markdown),
        examples: extract_examples(markdown),
        usage_notes: extract_notes(markdown, &USAGE_NOTES_HEADER, Some(&MEMORY_AIDS_HEADER)),
        memory_aids: extract_notes(markdown, &MEMORY_AIDS_HEADER, None),
    }
}

type TitleMatcher = fn(&str) -> Option<TitleMatch>;

// Tried in order; the first layout that matches wins.
const TITLE_MATCHERS: [TitleMatcher; 5] = [
    title_emphasized_pair,
    title_plain_pronunciation,
    title_gloss_in_emphasis,
    title_gloss_in_emphasis_tight,
    title_emphasized_pair_tight,
];

fn match_title(text: &str) -> Option<TitleMatch> {
    TITLE_MATCHERS.iter().find_map(|matcher| matcher(text))
}

fn captures_to_title(re: &Regex, text: &str) -> Option<TitleMatch> {
    re.captures(text).map(|caps| TitleMatch {
        pinyin: caps[1].trim().to_string(),
        english: caps[2].trim().to_string(),
    })
}

/// `# **好 (hǎo)** - good`
fn title_emphasized_pair(text: &str) -> Option<TitleMatch> {
    captures_to_title(&TITLE_EMPHASIZED_PAIR, text)
}

/// `# **好** (hǎo) - good`
fn title_plain_pronunciation(text: &str) -> Option<TitleMatch> {
    captures_to_title(&TITLE_PLAIN_PRONUNCIATION, text)
}

/// `# **好 (hǎo) - good**`
fn title_gloss_in_emphasis(text: &str) -> Option<TitleMatch> {
    captures_to_title(&TITLE_GLOSS_IN_EMPHASIS, text)
}

/// `# **好(hǎo) - good**`
fn title_gloss_in_emphasis_tight(text: &str) -> Option<TitleMatch> {
    captures_to_title(&TITLE_GLOSS_IN_EMPHASIS_TIGHT, text)
}

/// `# **好(hǎo)** - good`
fn title_emphasized_pair_tight(text: &str) -> Option<TitleMatch> {
    captures_to_title(&TITLE_EMPHASIZED_PAIR_TIGHT, text)
}

/// Slice the text between the end of `header` and the earliest of the
/// given terminator headers, or the end of the string.
fn section_body<'a>(text: &'a str, header: &Regex, terminators: &[&Regex]) -> Option<&'a str> {
    let start = header.find(text)?.end();
    let rest = &text[start..];
    let end = terminators
        .iter()
        .filter_map(|re| re.find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn extract_character_breakdown(text: &str) -> Vec<String> {
    let block = match section_body(
        text,
        &BREAKDOWN_HEADER,
        &[&EXAMPLES_HEADER, &USAGE_NOTES_HEADER, &MEMORY_AIDS_HEADER],
    ) {
        Some(block) => block,
        None => return Vec::new(),
    };

    // Blank lines neither terminate an entry nor appear in the output.
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    // A block with no unindented line at all (bare prose) is one entry.
    if lines.iter().all(|line| starts_indented(line)) {
        return vec![lines.join("\n")];
    }

    let mut entries: Vec<String> = Vec::new();
    for line in lines {
        if starts_indented(line) {
            match entries.last_mut() {
                Some(entry) => {
                    entry.push('\n');
                    entry.push_str(line);
                }
                None => entries.push(line.to_string()),
            }
        } else {
            entries.push(line.to_string());
        }
    }
    entries
}

fn starts_indented(line: &str) -> bool {
    line.starts_with(|c: char| c == ' ' || c == '\t')
}

fn extract_examples(text: &str) -> Vec<String> {
    let start = match EXAMPLES_HEADER.find(text) {
        Some(m) => m.end(),
        None => return Vec::new(),
    };
    let rest = &text[start..];
    let end = EXAMPLES_TERMINATOR
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());

    rest[..end]
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("- "))
        .map(str::to_string)
        .collect()
}

/// Shared extraction for Usage Notes and Memory Aids.
///
/// Text trailing the header on the same physical line becomes the first
/// note with any leading bullet dash stripped; every later non-blank line
/// is kept trimmed but otherwise verbatim, bullet dashes included.
fn extract_notes(text: &str, header: &Regex, terminator: Option<&Regex>) -> Vec<String> {
    let start = match header.find(text) {
        Some(m) => m.end(),
        None => return Vec::new(),
    };
    let rest = &text[start..];
    let end = terminator
        .and_then(|re| re.find(rest))
        .map(|m| m.start())
        .unwrap_or(rest.len());
    let block = &rest[..end];

    let (header_line_rest, body) = match block.find('\n') {
        Some(i) => (&block[..i], &block[i + 1..]),
        None => (block, ""),
    };

    let mut notes = Vec::new();
    let inline = header_line_rest.trim();
    let inline = inline
        .strip_prefix('-')
        .map(str::trim_start)
        .unwrap_or(inline);
    if !inline.is_empty() {
        notes.push(inline.to_string());
    }

    for line in body.lines() {
        let line = line.trim();
        if !line.is_empty() {
            notes.push(line.to_string());
        }
    }
    notes
}
