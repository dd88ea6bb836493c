//! Text normalization and tokenization shared by sources, ranking,
//! summarization and confidence scoring.

use std::sync::LazyLock;

use regex::Regex;

static RE_HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());
static RE_YEAR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{4}").ok());

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
    "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours",
];

/// Normalize a single-line field such as a title or author name.
///
/// Strips HTML tags and control characters, collapses whitespace and
/// repeated `.` / `,`.
pub fn clean_inline(text: &str) -> String {
    let stripped = match RE_HTML_TAG.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    };

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if ch.is_control() {
            continue;
        }
        if (ch == '.' || ch == ',') && !pending_space && out.ends_with(ch) {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

/// Normalize prose (an abstract or extract) and make sure it ends with
/// terminal punctuation.
pub fn clean_text(text: &str) -> String {
    let mut out = clean_inline(text);
    if let Some(last) = out.chars().last() {
        if !matches!(last, '.' | '!' | '?') {
            out.push('.');
        }
    }
    out
}

/// Lowercased alphanumeric tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Tokens with stopwords removed.
pub fn content_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect()
}

/// Split prose into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace and an
/// uppercase letter, a digit, or an opening bracket/quote.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        if matches!(chars[i], '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let boundary = j == chars.len()
                || (j > i + 1
                    && (chars[j].is_uppercase()
                        || chars[j].is_ascii_digit()
                        || matches!(chars[j], '(' | '[' | '"' | '\'')));
            if boundary {
                push_trimmed(&mut sentences, &chars[start..=i]);
                start = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }
    sentences
}

fn push_trimmed(out: &mut Vec<String>, chars: &[char]) {
    let s: String = chars.iter().collect();
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

/// Truncate at a word boundary, appending `suffix` when shortened.
/// `max_chars` counts characters, not bytes.
pub fn truncate_text(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    let cut = match head.rfind(' ') {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head.as_str(),
    };
    format!("{}{suffix}", cut.trim_end())
}

/// Year from `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SSZ`, `YYYY`, or the first
/// four-digit run anywhere in the string.
pub fn extract_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    let prefix: String = date.chars().take(4).collect();
    if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        return prefix.parse().ok();
    }
    RE_YEAR
        .as_ref()
        .and_then(|re| re.find(date))
        .and_then(|m| m.as_str().parse().ok())
}

/// Confidence in [0, 1] as a percentage string, e.g. `"85.5%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
