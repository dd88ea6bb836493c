//! Built-in abstractive summarizer.
//!
//! Rewrites only connective tissue: a transition word at the start of each
//! new document's first sentence and a `[n]` citation marker at the end of
//! every sentence. Content words are never changed.

use scholar_core::errors::SummarizationError;
use scholar_core::models::{Document, ExtractedSentence};
use scholar_core::traits::IAbstractiveSummarizer;

pub const SENTENCE_FUSION: &str = "sentence-fusion";

/// Transitions used between documents, cycled in order.
pub const CONNECTIVES: &[&str] = &["Additionally", "Furthermore", "Similarly", "Moreover"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceFusion;

impl IAbstractiveSummarizer for SentenceFusion {
    fn summarize(
        &self,
        _query: &str,
        extracts: &[ExtractedSentence],
        cited: &[Document],
    ) -> Result<String, SummarizationError> {
        let mut out: Vec<String> = Vec::with_capacity(extracts.len());
        let mut previous_url: Option<&str> = None;
        let mut transitions = 0;

        for extract in extracts {
            let citation = cited
                .iter()
                .position(|d| d.url == extract.document_url)
                .map(|i| i + 1)
                .ok_or_else(|| SummarizationError::GenerationFailed {
                    reason: format!("extract from uncited document {}", extract.document_url),
                })?;

            let new_document = previous_url.is_some_and(|u| u != extract.document_url);
            let body = if new_document {
                let connective = CONNECTIVES[transitions % CONNECTIVES.len()];
                transitions += 1;
                format!("{connective}, {}", lower_first(&extract.text))
            } else {
                extract.text.clone()
            };
            out.push(with_citation(&body, citation));
            previous_url = Some(extract.document_url.as_str());
        }

        if out.is_empty() {
            return Err(SummarizationError::GenerationFailed {
                reason: "no extracts to fuse".to_string(),
            });
        }
        Ok(out.join(" "))
    }

    fn name(&self) -> &str {
        SENTENCE_FUSION
    }
}

/// Lowercase the first letter unless the first word looks like an acronym.
fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_lowercase() => {
            let mut s: String = first.to_lowercase().collect();
            s.push_str(&text[first.len_utf8()..]);
            s
        }
        _ => text.to_string(),
    }
}

/// Insert ` [n]` before the sentence's terminal punctuation.
fn with_citation(sentence: &str, citation: usize) -> String {
    let trimmed = sentence.trim_end();
    match trimmed.chars().last() {
        Some(p @ ('.' | '!' | '?')) => {
            let body = &trimmed[..trimmed.len() - p.len_utf8()];
            format!("{body} [{citation}]{p}")
        }
        _ => format!("{trimmed} [{citation}]."),
    }
}
