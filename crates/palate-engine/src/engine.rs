//! The flavor match engine.
//!
//! Reduces one free-text description and one-to-many reference flavor
//! labels to a single best match score and the label that achieved it.
//! Exact hits against the synonym-expanded reference set win outright;
//! otherwise the best of fuzzy and semantic similarity over all extracted
//! keywords decides.

use std::collections::HashSet;

use crate::annotate::{extract_keywords, TextAnnotator};
use crate::error::EngineError;
use crate::similarity::{lexical_ratio, SimilarityScorer};
use crate::thesaurus::{expand, Thesaurus};
use crate::types::{DishScore, Edibility};

/// Split a comma-separated reference flavor cell into trimmed labels.
/// Empty segments are dropped.
#[must_use]
pub fn parse_labels(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Matches descriptions against reference flavors using injected
/// capabilities: a text annotator, a thesaurus snapshot, and a similarity
/// scorer. All three are constructed once per run and read-only thereafter.
pub struct FlavorMatcher {
    annotator: Box<dyn TextAnnotator + Send + Sync>,
    thesaurus: Box<dyn Thesaurus + Send + Sync>,
    scorer: SimilarityScorer,
}

impl FlavorMatcher {
    #[must_use]
    pub fn new(
        annotator: Box<dyn TextAnnotator + Send + Sync>,
        thesaurus: Box<dyn Thesaurus + Send + Sync>,
        scorer: SimilarityScorer,
    ) -> Self {
        Self {
            annotator,
            thesaurus,
            scorer,
        }
    }

    /// Match one description against one reference flavor label.
    ///
    /// Any extracted keyword found in `expanded` (case-insensitive) is a
    /// perfect match: 1.0, no similarity work. Otherwise the result is the
    /// best of lexical and semantic similarity over all keywords; no
    /// keywords means 0.0.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embed`] if the embedding endpoint fails.
    pub async fn match_flavor(
        &self,
        description: &str,
        reference_flavor: &str,
        expanded: &HashSet<String>,
    ) -> Result<f64, EngineError> {
        let keywords = extract_keywords(self.annotator.as_ref(), description);
        self.match_label(&keywords, reference_flavor, expanded).await
    }

    async fn match_label(
        &self,
        keywords: &[String],
        reference_flavor: &str,
        expanded: &HashSet<String>,
    ) -> Result<f64, EngineError> {
        // Expanded-set membership short-circuits before any similarity
        // work; similarity has no side effects, so deciding membership
        // up front is equivalent to the per-keyword interleaving.
        if keywords.iter().any(|k| expanded.contains(k.as_str())) {
            return Ok(1.0);
        }

        let mut best = 0.0_f64;
        let semantic_scores = self.scorer.semantic_many(keywords, reference_flavor).await?;
        for (keyword, semantic) in keywords.iter().zip(semantic_scores) {
            let lexical = lexical_ratio(keyword, reference_flavor);
            best = best.max(lexical).max(semantic);
        }
        Ok(best)
    }

    /// Score one dish: expand the whole reference set once, match every
    /// label against it, and keep the maximum. The first label (input
    /// order) achieving the maximum is the best predicted flavor.
    ///
    /// An empty reference set or an empty description scores 0.0 and still
    /// classifies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embed`] if the embedding endpoint fails.
    pub async fn score_dish(
        &self,
        description: &str,
        labels: &[String],
    ) -> Result<DishScore, EngineError> {
        let keywords = extract_keywords(self.annotator.as_ref(), description);
        let expanded = expand(self.thesaurus.as_ref(), labels);

        let mut best_score = 0.0_f64;
        let mut best_flavor = String::new();
        for (i, label) in labels.iter().enumerate() {
            let score = self.match_label(&keywords, label, &expanded).await?;
            // Strict comparison keeps the first label on ties.
            if score > best_score || i == 0 {
                best_score = score;
                best_flavor = label.clone();
            }
        }

        tracing::debug!(
            score = best_score,
            flavor = %best_flavor,
            keywords = keywords.len(),
            "dish scored"
        );

        Ok(DishScore {
            score: best_score,
            best_flavor,
            edibility: Edibility::from_score(best_score),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::annotate::RuleTagger;
    use crate::embeddings::EmbedClient;
    use crate::thesaurus::LexiconThesaurus;

    use super::*;

    #[test]
    fn parse_labels_splits_and_trims() {
        assert_eq!(parse_labels("sweet, spicy"), vec!["sweet", "spicy"]);
        assert_eq!(parse_labels("umami"), vec!["umami"]);
        assert_eq!(parse_labels(" ,sweet,, "), vec!["sweet"]);
        assert!(parse_labels("").is_empty());
    }

    fn matcher(server_url: &str) -> FlavorMatcher {
        FlavorMatcher::new(
            Box::new(RuleTagger::new()),
            Box::new(LexiconThesaurus::builtin()),
            SimilarityScorer::new(EmbedClient::new(server_url, 5).unwrap()),
        )
    }

    #[tokio::test]
    async fn expanded_set_hit_returns_perfect_score_without_embedding() {
        let server = MockServer::start().await;
        // No mock mounted: any embedding request would fail, proving the
        // short-circuit path does no similarity work.
        let m = matcher(&server.uri());

        let expanded = expand(
            &LexiconThesaurus::builtin(),
            &["sweet".to_string(), "spicy".to_string()],
        );
        let score = m
            .match_flavor("This tastes sweet and smoky", "sweet", &expanded)
            .await
            .unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn synonym_hit_counts_as_perfect_match() {
        let server = MockServer::start().await;
        let m = matcher(&server.uri());

        // "sugary" is a synonym of "sweet" in the built-in lexicon.
        let expanded = expand(&LexiconThesaurus::builtin(), &["sweet".to_string()]);
        let score = m
            .match_flavor("very sugary dessert", "sweet", &expanded)
            .await
            .unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn no_keywords_scores_zero() {
        let server = MockServer::start().await;
        let m = matcher(&server.uri());

        let expanded = expand(&LexiconThesaurus::builtin(), &["umami".to_string()]);
        let score = m.match_flavor("it is", "umami", &expanded).await.unwrap();
        assert!(score.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn best_of_lexical_and_semantic_wins() {
        let server = MockServer::start().await;
        // One keyword, lexically distant from the label; the endpoint
        // reports near-identical embeddings, so the semantic score carries.
        Mock::given(method("POST"))
            .and(path("/embed"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([[1.0, 0.0], [0.96, 0.28]])),
            )
            .mount(&server)
            .await;
        let m = matcher(&server.uri());

        let expanded = expand(&LexiconThesaurus::builtin(), &["sweet".to_string()]);
        let score = m.match_flavor("dessert", "sweet", &expanded).await.unwrap();
        assert!(score > 0.9, "expected semantic score to win, got {score}");
    }

    #[tokio::test]
    async fn score_dish_reports_first_label_on_tie() {
        let server = MockServer::start().await;
        let m = matcher(&server.uri());

        // Both labels expand to sets containing the keyword "sweet", so both
        // score 1.0; the first must win.
        let labels = vec!["sweet".to_string(), "sugary".to_string()];
        let result = m.score_dish("so sweet", &labels).await.unwrap();
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.best_flavor, "sweet");
        assert_eq!(result.edibility, Edibility::Edible);
    }

    #[tokio::test]
    async fn score_dish_empty_labels_is_spoiled_zero() {
        let server = MockServer::start().await;
        let m = matcher(&server.uri());

        let result = m.score_dish("sweet and smoky", &[]).await.unwrap();
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.best_flavor, "");
        assert_eq!(result.edibility, Edibility::PotentiallySpoiled);
    }

    #[tokio::test]
    async fn sweet_and_smoky_description_is_edible() {
        let server = MockServer::start().await;
        let m = matcher(&server.uri());

        let labels = parse_labels("sweet, spicy");
        // "sweet" is extracted and present in the expanded set -> 1.0 for
        // the "sweet" label without any embedding traffic. The "spicy"
        // label also short-circuits on the same membership hit, so the
        // whole dish scores offline.
        let result = m.score_dish("This tastes sweet and smoky", &labels).await.unwrap();
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.best_flavor, "sweet");
        assert_eq!(result.edibility, Edibility::Edible);
    }

    #[tokio::test]
    async fn bland_and_watery_description_is_spoiled() {
        let server = MockServer::start().await;
        // Embeddings far apart: semantic scores stay low, as does lexical.
        Mock::given(method("POST"))
            .and(path("/embed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                [1.0, 0.0],
                [0.1, 0.9],
                [0.0, 1.0]
            ])))
            .mount(&server)
            .await;
        let m = matcher(&server.uri());

        let labels = parse_labels("umami");
        let result = m.score_dish("bland and watery", &labels).await.unwrap();
        assert!(result.score < 0.75, "got {}", result.score);
        assert_eq!(result.edibility, Edibility::PotentiallySpoiled);
    }

    #[tokio::test]
    async fn monotonicity_larger_semantic_cannot_decrease_score() {
        // Same keywords, same lexical path; raise one semantic score and
        // the result must not drop.
        let labels = parse_labels("umami");

        let low = {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/embed"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    [1.0, 0.0],
                    [0.5, 0.86],
                    [0.0, 1.0]
                ])))
                .mount(&server)
                .await;
            matcher(&server.uri())
                .score_dish("bland and watery", &labels)
                .await
                .unwrap()
                .score
        };

        let high = {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/embed"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    [1.0, 0.0],
                    [0.9, 0.43],
                    [0.0, 1.0]
                ])))
                .mount(&server)
                .await;
            matcher(&server.uri())
                .score_dish("bland and watery", &labels)
                .await
                .unwrap()
                .score
        };

        assert!(high >= low, "high={high} low={low}");
    }
}
