//! Fuzzy lexical and semantic similarity between short strings.

use strsim::normalized_levenshtein;

use crate::embeddings::{cosine, EmbedClient};
use crate::error::EngineError;

/// Edit-distance ratio between two strings, case-insensitive, in `[0.0, 1.0]`.
#[must_use]
pub fn lexical_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Best ratio of the shorter string against every equal-length character
/// window of the longer one. Used for ingredient-to-flavor matching where
/// the flavor term is embedded inside a longer ingredient phrase.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (&a, &b)
    } else {
        (&b, &a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 1.0;
    }
    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let window: String = window.iter().collect();
        best = best.max(normalized_levenshtein(short, &window));
    }
    best
}

/// Computes the two similarity sub-scores for (keyword, reference-flavor)
/// pairs: a fuzzy lexical ratio and an embedding cosine. Holds the injected
/// embedding client; deterministic for a fixed model behind the endpoint.
pub struct SimilarityScorer {
    embed: EmbedClient,
}

impl SimilarityScorer {
    #[must_use]
    pub fn new(embed: EmbedClient) -> Self {
        Self { embed }
    }

    /// Score one pair: `(lexical, semantic)`, both comparable without
    /// renormalization. The semantic score can be below 0.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embed`] if the embedding endpoint fails.
    pub async fn score_pair(&self, a: &str, b: &str) -> Result<(f64, f64), EngineError> {
        let lexical = lexical_ratio(a, b);
        let vectors = self
            .embed
            .embed(&[&a.to_lowercase(), &b.to_lowercase()])
            .await?;
        let semantic = cosine(&vectors[0], &vectors[1]);
        Ok((lexical, semantic))
    }

    /// Semantic similarity of each word against one reference label, in
    /// word order, using a single embedding request for the whole set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embed`] if the embedding endpoint fails.
    pub async fn semantic_many(
        &self,
        words: &[String],
        label: &str,
    ) -> Result<Vec<f64>, EngineError> {
        if words.is_empty() {
            return Ok(Vec::new());
        }
        let label_lower = label.to_lowercase();
        let words_lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mut inputs: Vec<&str> = Vec::with_capacity(words_lower.len() + 1);
        inputs.push(&label_lower);
        inputs.extend(words_lower.iter().map(String::as_str));
        let vectors = self.embed.embed(&inputs).await?;
        let label_vec = &vectors[0];
        Ok(vectors[1..].iter().map(|v| cosine(v, label_vec)).collect())
    }
}
