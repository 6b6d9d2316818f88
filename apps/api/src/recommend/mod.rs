// Similarity ranking over the job table.
// The TF-IDF space is rebuilt from the current table on every query; nothing is cached.

pub mod handlers;
pub mod ranker;
pub mod tfidf;
pub mod tokenizer;

/// Minimum cosine similarity for a job to be recommended.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;
