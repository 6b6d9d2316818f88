use tracing::debug;

use super::tfidf::{SparseVector, TfIdfModel};
use crate::models::job::JobRecord;

/// A record position in the table and its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredJob {
    pub index: usize,
    pub similarity: f64,
}

/// Ranks records by similarity to the first record titled exactly
/// `target_title`, over `title + description + category` text.
///
/// Returns an empty list when no record has that title.
pub fn rank_by_title(records: &[JobRecord], target_title: &str, threshold: f64) -> Vec<ScoredJob> {
    let Some(target) = records.iter().position(|r| r.title == target_title) else {
        debug!("No job titled {target_title:?}");
        return Vec::new();
    };

    let corpus: Vec<String> = records.iter().map(composite_text).collect();
    let (_, vectors) = TfIdfModel::fit_transform(corpus.as_slice());

    rank_against(&vectors[target], &vectors, threshold)
}

/// Ranks records by similarity between `query` and each record's skills.
/// Query terms absent from every record contribute nothing.
pub fn rank_by_skills(records: &[JobRecord], query: &str, threshold: f64) -> Vec<ScoredJob> {
    let corpus: Vec<&str> = records.iter().map(|r| r.skills.as_str()).collect();
    let (model, vectors) = TfIdfModel::fit_transform(corpus.as_slice());
    let query_vector = model.transform(query);

    rank_against(&query_vector, &vectors, threshold)
}

fn composite_text(record: &JobRecord) -> String {
    format!(
        "{} {} {}",
        record.title,
        record.description,
        record.category.as_deref().unwrap_or("")
    )
}

/// Keeps vectors scoring at least `threshold` against `query`, most similar
/// first. The sort is stable, so ties keep table order.
fn rank_against(query: &SparseVector, vectors: &[SparseVector], threshold: f64) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = vectors
        .iter()
        .enumerate()
        .map(|(index, v)| ScoredJob {
            index,
            similarity: query.cosine(v),
        })
        .filter(|s| s.similarity >= threshold)
        .collect();

    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(title: &str, description: &str, skills: &str, category: Option<&str>) -> JobRecord {
        JobRecord {
            id: 0,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            experience_level: "Mid".to_string(),
            skills: skills.to_string(),
            employment_type: "Full-time".to_string(),
            salary: "100k".to_string(),
            description: description.to_string(),
            category: category.map(String::from),
        }
    }

    fn assert_non_increasing(results: &[ScoredJob]) {
        for pair in results.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn test_title_single_record_matches_itself() {
        let jobs = vec![make_job("Rust Developer", "Build backend services", "rust", None)];
        let results = rank_by_title(&jobs, "Rust Developer", 0.1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 0);
        assert!((results[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_title_unknown_returns_empty() {
        let jobs = vec![make_job("Rust Developer", "Build backend services", "rust", None)];
        assert!(rank_by_title(&jobs, "rust developer", 0.1).is_empty());
        assert!(rank_by_title(&jobs, "Chef", 0.1).is_empty());
    }

    #[test]
    fn test_title_empty_corpus_returns_empty() {
        assert!(rank_by_title(&[], "Anything", 0.1).is_empty());
    }

    #[test]
    fn test_title_ranks_related_jobs_first() {
        let jobs = vec![
            make_job("Pastry Chef", "Bake bread and cakes", "baking", Some("Hospitality")),
            make_job("Rust Developer", "Build backend services in Rust", "rust", Some("Engineering")),
            make_job("Backend Developer", "Build backend APIs", "go", Some("Engineering")),
        ];
        let results = rank_by_title(&jobs, "Rust Developer", 0.1);

        assert_eq!(results[0].index, 1);
        assert_eq!(results[1].index, 2);
        assert!(results.iter().all(|r| r.index != 0));
        assert_non_increasing(&results);
    }

    #[test]
    fn test_title_uses_first_exact_match() {
        let jobs = vec![
            make_job("Developer", "Rust services", "rust", None),
            make_job("Developer", "Cook pasta", "cooking", None),
        ];
        let results = rank_by_title(&jobs, "Developer", 0.1);
        assert_eq!(results[0].index, 0);
        assert!((results[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_title_stop_word_only_text_returns_empty() {
        let jobs = vec![make_job("The", "and of", "rust", None)];
        assert!(rank_by_title(&jobs, "The", 0.1).is_empty());
    }

    #[test]
    fn test_skills_shared_term_returns_both_in_table_order() {
        let jobs = vec![
            make_job("Engineer A", "", "python,sql", None),
            make_job("Engineer B", "", "python,java", None),
        ];
        let results = rank_by_skills(&jobs, "python", 0.1);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].index, 0);
        assert_eq!(results[1].index, 1);
        assert_eq!(results[0].similarity, results[1].similarity);
        assert!(results[0].similarity >= 0.1);
    }

    #[test]
    fn test_skills_disjoint_query_returns_empty() {
        let jobs = vec![
            make_job("Engineer A", "", "python,sql", None),
            make_job("Engineer B", "", "python,java", None),
        ];
        assert!(rank_by_skills(&jobs, "haskell cobol", 0.1).is_empty());
    }

    #[test]
    fn test_skills_orders_by_similarity() {
        let jobs = vec![
            make_job("Analyst", "", "excel, sql", None),
            make_job("Data Engineer", "", "python, spark, sql", None),
            make_job("ML Engineer", "", "python, pytorch", None),
        ];
        let results = rank_by_skills(&jobs, "python pytorch", 0.1);

        assert_eq!(results[0].index, 2);
        assert_eq!(results[1].index, 1);
        assert!(results.iter().all(|r| r.index != 0));
        assert_non_increasing(&results);
    }

    #[test]
    fn test_skills_empty_fields_score_zero() {
        let jobs = vec![
            make_job("Engineer A", "", "", None),
            make_job("Engineer B", "", "rust", None),
        ];
        let results = rank_by_skills(&jobs, "rust", 0.1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let jobs = vec![make_job("Engineer", "", "rust", None)];
        let results = rank_by_skills(&jobs, "rust", 1.0);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_zero_threshold_keeps_every_record() {
        let jobs = vec![
            make_job("Engineer A", "", "rust", None),
            make_job("Engineer B", "", "java", None),
        ];
        let results = rank_by_skills(&jobs, "rust", 0.0);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].index, 0);
    }
}
