use crate::document::{load_keywords, load_keywords_from_document};
use crate::error::Result;
use crate::keyword::NoiseWords;
use crate::merge::insert_last_occurrence;
use crate::scanner::{load_document_list, DocumentScanner, FsScanner};
use crate::search::{top_n, TOP_N};
use crate::{KeywordMap, Occurrence};
use std::collections::HashMap;
use std::path::Path;

/// Keyword -> occurrences across all documents, each list kept in
/// non-increasing frequency order.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    noise: NoiseWords,
    documents: usize,
}

impl KeywordIndex {
    pub fn new(noise: NoiseWords) -> Self {
        Self { keywords: HashMap::new(), noise, documents: 0 }
    }

    /// Build an index from a document list file (or directory) and a noise-word file.
    /// Document identifiers in a list file resolve relative to the list's directory.
    pub fn make_index<P: AsRef<Path>, Q: AsRef<Path>>(docs_path: P, noise_path: Q) -> Result<Self> {
        let noise = NoiseWords::from_file(noise_path)?;
        let docs_path = docs_path.as_ref();
        let documents = load_document_list(docs_path)?;
        let scanner = match docs_path.parent() {
            Some(parent) if docs_path.is_file() => FsScanner::with_base(parent),
            _ => FsScanner::new(),
        };
        Self::build(noise, &scanner, documents)
    }

    /// Index every document in order. Any scan failure aborts the build.
    pub fn build<S, I, D>(noise: NoiseWords, scanner: &S, documents: I) -> Result<Self>
    where
        S: DocumentScanner,
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let mut index = Self::new(noise);
        for document in documents {
            let kws = load_keywords_from_document(scanner, document.as_ref(), &index.noise)?;
            index.merge_keywords(kws);
        }
        tracing::info!(
            documents = index.documents,
            keywords = index.keywords.len(),
            "index build complete"
        );
        Ok(index)
    }

    /// Index one document from an already tokenized stream.
    pub fn add_document<I, S>(&mut self, document: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kws = load_keywords(document, tokens, &self.noise);
        self.merge_keywords(kws);
    }

    /// Fold one document's keywords into the index.
    pub fn merge_keywords(&mut self, kws: KeywordMap) {
        for (kw, occ) in kws {
            let occs = self.keywords.entry(kw).or_default();
            occs.push(occ);
            insert_last_occurrence(occs);
        }
        self.documents += 1;
    }

    /// Occurrences of `keyword`, highest frequency first. Empty if unknown.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keyword_count(&self) -> usize { self.keywords.len() }

    /// Documents merged so far, including ones that yielded no keywords.
    pub fn document_count(&self) -> usize { self.documents }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise }

    /// Documents containing `kw1` or `kw2`, best first. `limit` is held to
    /// `1..=TOP_N`. `None` means neither keyword matched anything.
    pub fn top_search(&self, kw1: &str, kw2: &str, limit: usize) -> Option<Vec<String>> {
        let l1 = self.occurrences(kw1);
        let l2 = self.occurrences(kw2);
        if l1.is_empty() && l2.is_empty() {
            return None;
        }
        Some(top_n(l1, l2, limit.clamp(1, TOP_N)))
    }

    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        self.top_search(kw1, kw2, TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MemoryScanner;

    fn is_sorted(occs: &[Occurrence]) -> bool {
        occs.windows(2).all(|w| w[0].frequency >= w[1].frequency)
    }

    #[test]
    fn merges_keep_lists_sorted() {
        let mut index = KeywordIndex::new(NoiseWords::new());
        index.add_document("a", "car car red".split_whitespace());
        index.add_document("b", "car car car car red red".split_whitespace());
        index.add_document("c", "car red red red".split_whitespace());
        index.add_document("d", "car car red red red red red".split_whitespace());

        let cars: Vec<(&str, u32)> =
            index.occurrences("car").iter().map(|o| (o.document.as_str(), o.frequency)).collect();
        assert_eq!(cars, vec![("b", 4), ("a", 2), ("d", 2), ("c", 1)]);
        let reds: Vec<u32> = index.occurrences("red").iter().map(|o| o.frequency).collect();
        assert_eq!(reds, vec![5, 3, 2, 1]);
        assert_eq!(index.document_count(), 4);
        assert!(index.keywords().all(|(_, occs)| is_sorted(occs)));
    }

    #[test]
    fn equal_frequencies_stay_adjacent() {
        let mut index = KeywordIndex::new(NoiseWords::new());
        index.add_document("A", "car car car car car".split_whitespace());
        index.add_document("B", "car car car car car red red red".split_whitespace());
        let docs: Vec<&str> =
            index.occurrences("car").iter().map(|o| o.document.as_str()).collect();
        assert_eq!(docs.len(), 2);
        assert!(docs.contains(&"A") && docs.contains(&"B"));
        assert_eq!(index.occurrences("red"), &[Occurrence::new("B", 3)]);
    }

    #[test]
    fn build_fails_on_missing_document() {
        let scanner: MemoryScanner = [("one.txt", "hello world")].into_iter().collect();
        let err = KeywordIndex::build(NoiseWords::new(), &scanner, ["one.txt", "two.txt"]);
        assert!(err.is_err());
    }

    #[test]
    fn no_matches_sentinel() {
        let mut index = KeywordIndex::new(NoiseWords::new());
        index.add_document("a", "apple".split_whitespace());
        assert_eq!(index.top5_search("pear", "plum"), None);
        assert_eq!(index.top5_search("pear", "apple"), Some(vec!["a".to_string()]));
    }

    #[test]
    fn limit_is_held_to_five() {
        let mut index = KeywordIndex::new(NoiseWords::new());
        for i in 0..8 {
            index.add_document(&format!("d{i}"), "car ".repeat(i % 3 + 1).split_whitespace());
        }
        assert_eq!(index.occurrences("car").len(), 8);
        assert_eq!(index.top_search("car", "red", 10).unwrap().len(), TOP_N);
        assert_eq!(index.top_search("car", "red", usize::MAX).unwrap().len(), TOP_N);
        assert_eq!(index.top_search("car", "red", 0).unwrap().len(), 1);
        assert_eq!(index.top_search("car", "red", 3).unwrap().len(), 3);
    }
}
