//! Batch scoring orchestration and post-processing policy.
//!
//! Scoring walks the rows sequentially; the post-processing transforms are
//! pure functions over the full scored sequence, so the dedup/cap/sort
//! policy is independent of scoring order.

use crate::engine::{parse_labels, FlavorMatcher};
use crate::error::EngineError;
use crate::types::{BatchSummary, DishInput, Edibility, ScoredDish};

/// Hard cap on output rows after dedup and ranking.
pub const MAX_OUTPUT_ROWS: usize = 10_000;

/// Score every input row. Rows are processed to completion in order; any
/// embedding failure aborts the whole batch.
///
/// # Errors
///
/// Returns [`EngineError`] from the first row that fails.
pub async fn score_records(
    matcher: &FlavorMatcher,
    inputs: &[DishInput],
) -> Result<Vec<ScoredDish>, EngineError> {
    tracing::info!(rows = inputs.len(), "scoring batch");
    let mut scored = Vec::with_capacity(inputs.len());
    for input in inputs {
        let labels = parse_labels(&input.flavors);
        let result = matcher.score_dish(&input.user_flavor, &labels).await?;
        scored.push(ScoredDish {
            fields: input.fields.clone(),
            score: result.score,
            edibility: result.edibility,
        });
    }
    tracing::info!(rows = scored.len(), "batch scored");
    Ok(scored)
}

/// Remove exact-duplicate rows (all input fields plus the two derived
/// columns), keeping the first occurrence.
#[must_use]
pub fn dedup_exact(rows: Vec<ScoredDish>) -> Vec<ScoredDish> {
    let mut seen = std::collections::HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert((row.fields.clone(), row.score.to_bits(), row.edibility)))
        .collect()
}

/// Sort by match score descending (stable, so equal scores keep input
/// order) and retain only the top [`MAX_OUTPUT_ROWS`] rows.
#[must_use]
pub fn rank_and_cap(mut rows: Vec<ScoredDish>) -> Vec<ScoredDish> {
    rows.sort_by(|a, b| b.score.total_cmp(&a.score));
    rows.truncate(MAX_OUTPUT_ROWS);
    rows
}

/// Aggregate counts and the spoiled group's mean/median score.
#[must_use]
pub fn summarize(rows: &[ScoredDish]) -> BatchSummary {
    let edible_count = rows
        .iter()
        .filter(|r| r.edibility == Edibility::Edible)
        .count();
    let mut spoiled_scores: Vec<f64> = rows
        .iter()
        .filter(|r| r.edibility == Edibility::PotentiallySpoiled)
        .map(|r| r.score)
        .collect();
    spoiled_scores.sort_by(f64::total_cmp);

    let spoiled_mean = if spoiled_scores.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let denom = spoiled_scores.len() as f64;
        Some(spoiled_scores.iter().sum::<f64>() / denom)
    };
    let spoiled_median = match spoiled_scores.len() {
        0 => None,
        n if n % 2 == 1 => Some(spoiled_scores[n / 2]),
        n => Some((spoiled_scores[n / 2 - 1] + spoiled_scores[n / 2]) / 2.0),
    };

    BatchSummary {
        edible_count,
        spoiled_count: spoiled_scores.len(),
        spoiled_mean,
        spoiled_median,
    }
}
