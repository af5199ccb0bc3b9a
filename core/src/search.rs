use crate::Occurrence;

/// Result bound for two-keyword queries.
pub const TOP_N: usize = 5;

/// Merge two frequency-sorted occurrence lists into at most `limit` distinct
/// documents, highest frequency first. On equal frequencies the first list's
/// document goes ahead of the second's.
pub fn top_n(l1: &[Occurrence], l2: &[Occurrence], limit: usize) -> Vec<String> {
    let mut results: Vec<String> = Vec::with_capacity(limit.min(l1.len() + l2.len()));
    let (mut i, mut j) = (0, 0);

    while results.len() < limit {
        match (l1.get(i), l2.get(j)) {
            (Some(a), Some(b)) if a.frequency > b.frequency => {
                push_unique(&mut results, &a.document);
                i += 1;
            }
            (Some(a), Some(b)) if a.frequency < b.frequency => {
                push_unique(&mut results, &b.document);
                j += 1;
            }
            (Some(a), Some(b)) => {
                push_unique(&mut results, &a.document);
                if results.len() < limit {
                    push_unique(&mut results, &b.document);
                }
                i += 1;
                j += 1;
            }
            (Some(a), None) => {
                push_unique(&mut results, &a.document);
                i += 1;
            }
            (None, Some(b)) => {
                push_unique(&mut results, &b.document);
                j += 1;
            }
            (None, None) => break,
        }
    }
    results
}

fn push_unique(results: &mut Vec<String>, document: &str) {
    if !results.iter().any(|d| d == document) {
        results.push(document.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, u32)]) -> Vec<Occurrence> {
        entries.iter().map(|&(d, f)| Occurrence::new(d, f)).collect()
    }

    #[test]
    fn higher_frequency_first_then_keyword_one_on_ties() {
        let red = list(&[("docA", 5)]);
        let car = list(&[("docB", 7), ("docC", 5)]);
        assert_eq!(top_n(&red, &car, TOP_N), vec!["docB", "docA", "docC"]);
    }

    #[test]
    fn drains_remaining_list() {
        let l1 = list(&[("a", 9)]);
        let l2 = list(&[("b", 4), ("c", 3), ("d", 1)]);
        assert_eq!(top_n(&l1, &l2, TOP_N), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn shared_documents_appear_once() {
        let l1 = list(&[("x", 6), ("y", 2)]);
        let l2 = list(&[("y", 6), ("x", 1)]);
        assert_eq!(top_n(&l1, &l2, TOP_N), vec!["x", "y"]);
    }

    #[test]
    fn tie_never_exceeds_limit() {
        let l1 = list(&[("a", 9), ("b", 8), ("c", 7), ("d", 6), ("e", 3)]);
        let l2 = list(&[("v", 6), ("w", 2)]);
        assert_eq!(top_n(&l1, &l2, TOP_N), vec!["a", "b", "c", "d", "v"]);
        assert_eq!(top_n(&l1, &l2, 4), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_lists_give_empty_result() {
        assert!(top_n(&[], &[], TOP_N).is_empty());
    }
}
