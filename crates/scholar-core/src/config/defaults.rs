// Single source of truth for all default values.

// --- Sources ---
pub const DEFAULT_SEMANTIC_SCHOLAR_URL: &str = "https://api.semanticscholar.org/graph/v1";
pub const DEFAULT_WIKIPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "scholar-research-pipeline/0.1";
pub const DEFAULT_PRIMARY_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SECONDARY_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_OVERFETCH_FACTOR: usize = 2;
pub const DEFAULT_MAX_FETCH: usize = 50;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "onnx";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Ranking ---
pub const DEFAULT_RANKING_STRATEGY: &str = "embedding";
pub const DEFAULT_MIN_RELEVANCE: f64 = 0.05;

// --- Summarization ---
pub const DEFAULT_SENTENCES_PER_DOCUMENT: usize = 2;
pub const DEFAULT_MAX_SUMMARY_SENTENCES: usize = 10;
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;
pub const DEFAULT_ABSTRACTIVE_ENABLED: bool = true;
pub const DEFAULT_TRACEABILITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_POSITION_WEIGHT: f64 = 0.4;
pub const DEFAULT_TERM_FREQUENCY_WEIGHT: f64 = 0.35;
pub const DEFAULT_QUERY_OVERLAP_WEIGHT: f64 = 0.25;

// --- Confidence ---
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_COHERENCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_TEMPORAL_WEIGHT: f64 = 0.2;
pub const DEFAULT_CITATION_SATURATION: u64 = 1_000;
pub const DEFAULT_FULL_SCORE_YEARS: u32 = 3;
pub const DEFAULT_HALF_LIFE_YEARS: f64 = 5.0;
pub const DEFAULT_UNKNOWN_YEAR_SCORE: f64 = 0.5;
pub const DEFAULT_REPUTABLE_VENUES: &[&str] = &[
    "nature",
    "science",
    "physical review",
    "neurips",
    "icml",
    "iclr",
    "acl",
    "cvpr",
    "ieee",
    "acm",
    "lancet",
    "cell",
    "pnas",
    "quantum",
];

// --- Pipeline ---
pub const DEFAULT_TIME_BUDGET_MS: u64 = 30_000;
pub const DEFAULT_MAX_PAPERS: usize = 10;
pub const DEFAULT_MAX_PAPERS_CAP: usize = 10;
pub const DEFAULT_MAX_QUERY_CHARS: usize = 500;
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
