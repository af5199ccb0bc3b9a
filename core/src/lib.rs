pub mod document;
pub mod error;
pub mod index;
pub mod keyword;
pub mod merge;
pub mod scanner;
pub mod search;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use error::{LseError, Result};
pub use index::KeywordIndex;
pub use keyword::NoiseWords;
pub use search::TOP_N;

/// One (document, frequency) pair for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Keyword -> occurrence within a single document.
pub type KeywordMap = HashMap<String, Occurrence>;
