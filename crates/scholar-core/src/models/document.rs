use serde::{Deserialize, Serialize};

/// Which upstream a document (or a whole result) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Primary,
    Fallback,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

/// A document as returned by an upstream source, before tagging and ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    pub title: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub venue: String,
    pub citation_count: u64,
    pub url: String,
    pub text: String,
}

impl RawDocument {
    /// A document is usable when it has a title, some text to summarize and a
    /// url to cite it by. The url is also its identity during de-duplication.
    pub fn is_usable(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.text.trim().is_empty()
            && !self.url.trim().is_empty()
    }
}

/// A candidate paper flowing through the pipeline.
///
/// Created by the Source Gateway, enriched with `relevance_score` by ranking,
/// read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub venue: String,
    pub citation_count: u64,
    pub url: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Similarity to the query in [0.0, 1.0]. Zero until ranked.
    pub relevance_score: f64,
    pub origin: Origin,
}

impl Document {
    /// Tag a raw upstream document with its origin.
    pub fn from_raw(raw: RawDocument, origin: Origin) -> Self {
        Self {
            title: raw.title,
            authors: raw.authors,
            year: raw.year,
            venue: raw.venue,
            citation_count: raw.citation_count,
            url: raw.url,
            abstract_text: raw.text,
            relevance_score: 0.0,
            origin,
        }
    }

    /// Text used for embedding and lexical ranking.
    pub fn ranking_text(&self) -> String {
        if self.abstract_text.is_empty() {
            self.title.clone()
        } else {
            format!("{}. {}", self.title, self.abstract_text)
        }
    }

    /// Copy with a new relevance score, clamped to [0.0, 1.0].
    pub fn with_relevance(mut self, score: f64) -> Self {
        self.relevance_score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }
}
