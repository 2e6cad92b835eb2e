//! Local dictionary building and tier classification.

use std::collections::{BTreeMap, HashMap};

use rto_core::{CodecConfig, Tier, Token, WordTable};

use crate::extract::extract_words;

/// Per-file token table, carried verbatim in the header.
///
/// Indices are dense from zero when built by [`classify`]; a decoded header
/// may be sparse, which only means some tokens resolve to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalDictionary {
    entries: BTreeMap<usize, String>,
}

impl LocalDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word under the next free index.
    pub fn push(&mut self, word: impl Into<String>) -> Token {
        let index = self.entries.len();
        self.entries.insert(index, word.into());
        Token::local(index)
    }

    pub fn insert(&mut self, index: usize, word: impl Into<String>) {
        self.entries.insert(index, word.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(token, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        self.entries.iter().map(|(i, w)| (Token::local(*i), w.as_str()))
    }
}

/// One planned rewrite: every whole-word `word` becomes `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub word: String,
    pub token: Token,
}

/// Output of classification: the ordered rewrite plan plus the local
/// dictionary it populated.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub plan: Vec<Substitution>,
    pub local: LocalDictionary,
}

impl Classification {
    pub fn count(&self, tier: Tier) -> usize {
        self.plan.iter().filter(|s| s.token.tier == tier).count()
    }
}

/// Occurrence counts per distinct word, in first-seen order.
pub fn count_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for word in words {
        match slots.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }
    counts
}

/// Words worth tokenizing, in classification order.
///
/// Keeps words seen at least `min_occurrences` times, the `max_local_entries`
/// most frequent of those, then orders them longest first. Ties in either
/// sort fall back to first-seen order.
pub fn select_frequent(text: &[u8], config: &CodecConfig) -> Vec<String> {
    let candidates = extract_words(text, config.min_word_length);
    // (first_seen, word, count)
    let mut counts: Vec<(usize, &str, usize)> = count_words(candidates.iter().map(|c| c.word))
        .into_iter()
        .enumerate()
        .filter(|(_, (_, count))| *count >= config.min_occurrences)
        .map(|(seen, (word, count))| (seen, word, count))
        .collect();

    counts.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    counts.truncate(config.max_local_entries);
    counts.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));

    counts.into_iter().map(|(_, word, _)| word.to_string()).collect()
}

/// Assign each word exactly one token: global if listed there, else type if
/// listed for the language, else the next local index.
pub fn classify(words: &[String], global: &WordTable, types: &WordTable) -> Classification {
    let mut classification = Classification::default();
    for word in words {
        let token = if let Some(i) = global.position(word) {
            Token::global(i)
        } else if let Some(i) = types.position(word) {
            Token::type_word(i)
        } else {
            classification.local.push(word.as_str())
        };
        tracing::trace!(%word, %token, "classified");
        classification.plan.push(Substitution { word: word.clone(), token });
    }
    classification
}
