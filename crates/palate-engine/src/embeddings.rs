//! HTTP client for the sentence-embedding capability.
//!
//! Talks to a TEI-style `/embed` endpoint backed by a fixed pre-trained
//! model. Constructed once per run and injected into the similarity
//! scorer; any failure here is fatal for the run, there is no offline
//! fallback.

use serde::Serialize;

use crate::error::EngineError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

/// Embedding endpoint HTTP client.
pub struct EmbedClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

impl EmbedClient {
    /// Create a new `EmbedClient` against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Http`] if the underlying HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/embed", base_url.trim_end_matches('/')),
        })
    }

    /// Generate embeddings for a batch of texts.
    ///
    /// Texts are batched into groups of [`BATCH_SIZE`] per request.
    /// Returns one embedding vector per input text, in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embed`] if a request fails, the endpoint
    /// answers with a non-success status, the response cannot be parsed,
    /// or the vector count does not match the input count.
    pub async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EngineError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| EngineError::Embed(format!("embed request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(EngineError::Embed(format!(
                    "embed endpoint returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| EngineError::Embed(format!("embed response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(EngineError::Embed(format!(
                    "embed endpoint returned {} vectors for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}

/// Cosine similarity between two dense vectors.
///
/// Zero-magnitude vectors (and mismatched lengths, which a well-behaved
/// endpoint never produces) yield 0.0. The result can be negative; callers
/// treat it as directly comparable to the lexical ratio.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
