use crate::error::{LseError, Result};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Produces the raw whitespace-delimited tokens of a document.
pub trait DocumentScanner {
    type Tokens: Iterator<Item = Result<String>>;

    fn scan(&self, document: &str) -> Result<Self::Tokens>;
}

/// Reads documents from disk, resolving identifiers against `base` when set.
#[derive(Debug, Clone, Default)]
pub struct FsScanner {
    base: Option<PathBuf>,
}

impl FsScanner {
    pub fn new() -> Self { Self::default() }

    pub fn with_base<P: AsRef<Path>>(base: P) -> Self {
        Self { base: Some(base.as_ref().to_path_buf()) }
    }

    fn resolve(&self, document: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(document),
            None => PathBuf::from(document),
        }
    }
}

impl DocumentScanner for FsScanner {
    type Tokens = FileTokens;

    fn scan(&self, document: &str) -> Result<Self::Tokens> {
        let path = self.resolve(document);
        let file = File::open(&path).map_err(|e| LseError::not_found(&path, e))?;
        Ok(FileTokens {
            path,
            lines: BufReader::new(file).lines(),
            pending: Vec::new().into_iter(),
            failed: false,
        })
    }
}

/// Tokens of an open file, read one line at a time.
///
/// A read error is yielded once and ends the stream.
pub struct FileTokens {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    pending: std::vec::IntoIter<String>,
    failed: bool,
}

impl Iterator for FileTokens {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            match self.lines.next()? {
                Ok(line) => {
                    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                    self.pending = tokens.into_iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(LseError::not_found(&self.path, e)));
                }
            }
        }
    }
}

/// In-memory documents keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryScanner {
    texts: HashMap<String, String>,
}

impl MemoryScanner {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(document.into(), text.into());
    }
}

impl<D: Into<String>, T: Into<String>> FromIterator<(D, T)> for MemoryScanner {
    fn from_iter<I: IntoIterator<Item = (D, T)>>(iter: I) -> Self {
        Self { texts: iter.into_iter().map(|(d, t)| (d.into(), t.into())).collect() }
    }
}

impl DocumentScanner for MemoryScanner {
    type Tokens = std::vec::IntoIter<Result<String>>;

    fn scan(&self, document: &str) -> Result<Self::Tokens> {
        let text = self
            .texts
            .get(document)
            .ok_or_else(|| LseError::DocumentNotFound(document.to_string()))?;
        let tokens: Vec<Result<String>> =
            text.split_whitespace().map(|t| Ok(t.to_string())).collect();
        Ok(tokens.into_iter())
    }
}

/// Read the list of documents to index.
///
/// A file holds whitespace-separated identifiers in order. A directory yields
/// every `.txt` file beneath it, sorted by path.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt"))
            .collect();
        files.sort();
        return Ok(files.into_iter().map(|p| p.to_string_lossy().into_owned()).collect());
    }
    let text = fs::read_to_string(path).map_err(|e| LseError::not_found(path, e))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
