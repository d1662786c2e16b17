//! Greedy longest-match segmentation and linking of Chinese text.
//!
//! Free text is scanned for maximal runs of CJK ideographs; inside each
//! run the segmenter repeatedly consumes the longest prefix recognized by
//! the caller's [`Lexicon`] and marks it linkable. Characters no
//! dictionary word covers pass through one at a time, unlinked, as does
//! everything outside the runs.
//!
//! The policy is strictly greedy left-to-right. It can split a run less
//! evenly than a whole-string optimization would, and that is the intended
//! behavior, matching how the links behave in the map client.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Word-existence oracle supplied by the caller, typically backed by the
/// vocabulary graph's node set. Never mutated by the segmenter.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// A node map keyed by headword works directly as an existence oracle.
impl<V> Lexicon for HashMap<String, V> {
    fn contains(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

/// One span of the segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// True when `text` is a dictionary word inside a CJK run.
    pub linked: bool,
}

impl Token {
    fn linked(text: String) -> Self {
        Token { text, linked: true }
    }

    fn plain(text: String) -> Self {
        Token {
            text,
            linked: false,
        }
    }
}

/// Split text into linkable and plain tokens.
///
/// Non-CJK spans come back as single unlinked tokens with their formatting
/// untouched; CJK runs are segmented greedily against the lexicon.
pub fn segment<L: Lexicon>(text: &str, lexicon: &L) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        if is_cjk(chars[i]) {
            while i < chars.len() && is_cjk(chars[i]) {
                i += 1;
            }
            segment_run(&chars[start..i], lexicon, &mut tokens);
        } else {
            while i < chars.len() && !is_cjk(chars[i]) {
                i += 1;
            }
            tokens.push(Token::plain(chars[start..i].iter().collect()));
        }
    }
    tokens
}

/// Replace every dictionary word with caller-rendered markup.
///
/// The markup scheme belongs entirely to `render`; unlinked spans are
/// emitted verbatim.
pub fn link_words<L, F>(text: &str, lexicon: &L, render: F) -> String
where
    L: Lexicon,
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    for token in segment(text, lexicon) {
        if token.linked {
            out.push_str(&render(&token.text));
        } else {
            out.push_str(&token.text);
        }
    }
    out
}

/// Greedy longest-match over one maximal CJK run.
///
/// An index-based cursor rather than recursion on the remainder, so a
/// pathologically long run cannot exhaust the stack.
fn segment_run<L: Lexicon>(run: &[char], lexicon: &L, tokens: &mut Vec<Token>) {
    let mut pos = 0;
    while pos < run.len() {
        let mut advanced = 0;
        for len in (1..=run.len() - pos).rev() {
            let candidate: String = run[pos..pos + len].iter().collect();
            if lexicon.contains(&candidate) {
                tokens.push(Token::linked(candidate));
                advanced = len;
                break;
            }
        }
        if advanced == 0 {
            // No prefix of any length is known; the leading character
            // passes through unlinked.
            tokens.push(Token::plain(run[pos].to_string()));
            advanced = 1;
        }
        pos += advanced;
    }
}

/// CJK Unified Ideographs, the range the vocabulary headwords live in.
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}
