use crate::error::{LseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

lazy_static! {
    // Letters followed by an optional run of trailing punctuation, nothing else.
    static ref KEYWORD_RE: Regex =
        Regex::new(r"^(\p{Alphabetic}*)([.,?:;!]*)$").expect("valid regex");
}

/// Words excluded from indexing. Stored as given; lookups are exact.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// Parse whitespace-separated noise words. Duplicates collapse.
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(Self::parse(&buf))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LseError::not_found(path, e))?;
        let words = Self::parse(&text);
        tracing::debug!(path = %path.display(), count = words.len(), "loaded noise words");
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Turn a raw token into a keyword, or `None` if it is not one.
///
/// The token is lower-cased, a trailing run of `. , ? : ; !` is stripped, and
/// what remains must be non-empty, purely alphabetic and not a noise word.
/// Punctuation anywhere before the trailing run rejects the token.
pub fn get_keyword(token: &str, noise: &NoiseWords) -> Option<String> {
    let lowered = token.to_lowercase();
    let caps = KEYWORD_RE.captures(&lowered)?;
    let word = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    if word.is_empty() || noise.contains(word) {
        return None;
    }
    Some(word.to_string())
}
