use serde::{Deserialize, Serialize};

use super::Document;

/// How a summary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizationMode {
    Abstractive,
    Extractive,
    /// Nothing to summarize.
    Empty,
}

impl SummarizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abstractive => "abstractive",
            Self::Extractive => "extractive",
            Self::Empty => "empty",
        }
    }
}

/// One sentence selected from a document abstract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSentence {
    pub text: String,
    /// `url` of the document the sentence came from.
    pub document_url: String,
    /// Sentence index within the abstract.
    pub position: usize,
    pub salience: f64,
}

/// Summary text plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    /// Documents that contributed extracts, in contribution order.
    pub cited: Vec<Document>,
    pub extracts: Vec<ExtractedSentence>,
    pub mode: SummarizationMode,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            cited: Vec::new(),
            extracts: Vec::new(),
            mode: SummarizationMode::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn cited_urls(&self) -> impl Iterator<Item = &str> {
        self.cited.iter().map(|d| d.url.as_str())
    }
}
