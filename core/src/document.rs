use crate::error::Result;
use crate::keyword::{get_keyword, NoiseWords};
use crate::scanner::DocumentScanner;
use crate::{KeywordMap, Occurrence};

/// Count keyword frequencies for one document's token stream.
pub fn load_keywords<I, S>(document: &str, tokens: I, noise: &NoiseWords) -> KeywordMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords = KeywordMap::new();
    for token in tokens {
        count_token(&mut keywords, document, token.as_ref(), noise);
    }
    keywords
}

/// Scan `document` and count its keywords. A read failure at any point
/// fails the whole document.
pub fn load_keywords_from_document<S: DocumentScanner>(
    scanner: &S,
    document: &str,
    noise: &NoiseWords,
) -> Result<KeywordMap> {
    let mut keywords = KeywordMap::new();
    for token in scanner.scan(document)? {
        count_token(&mut keywords, document, &token?, noise);
    }
    tracing::debug!(document, keywords = keywords.len(), "scanned document");
    Ok(keywords)
}

fn count_token(keywords: &mut KeywordMap, document: &str, token: &str, noise: &NoiseWords) {
    let Some(kw) = get_keyword(token, noise) else { return };
    keywords
        .entry(kw)
        .and_modify(|occ| occ.frequency += 1)
        .or_insert_with(|| Occurrence::new(document, 1));
}
