//! Guard that every generated sentence is grounded in some extract.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scholar_core::errors::SummarizationError;
use scholar_core::models::ExtractedSentence;
use scholar_core::text::{content_terms, split_sentences};

static RE_CITATION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[\d+\]").ok());

/// Check `output` against `extracts`.
///
/// Each output sentence must share at least `threshold` of its content terms
/// with a single extract. Citation markers and terms in `ignored` (the
/// summarizer's connectives) do not count. Sentences with no content terms
/// pass.
pub fn verify(
    output: &str,
    extracts: &[ExtractedSentence],
    threshold: f64,
    ignored: &[&str],
) -> Result<(), SummarizationError> {
    let output = match RE_CITATION.as_ref() {
        Some(re) => re.replace_all(output, "").into_owned(),
        None => output.to_string(),
    };
    let ignored: BTreeSet<String> = ignored.iter().map(|w| w.to_lowercase()).collect();
    let sources: Vec<BTreeSet<String>> = extracts
        .iter()
        .map(|e| content_terms(&e.text).into_iter().collect())
        .collect();

    for sentence in split_sentences(&output) {
        let terms: BTreeSet<String> = content_terms(&sentence)
            .into_iter()
            .filter(|t| !ignored.contains(t))
            .collect();
        if terms.is_empty() {
            continue;
        }
        let best = sources
            .iter()
            .map(|src| terms.intersection(src).count() as f64 / terms.len() as f64)
            .fold(0.0, f64::max);
        if best < threshold {
            return Err(SummarizationError::Untraceable { sentence });
        }
    }
    Ok(())
}
