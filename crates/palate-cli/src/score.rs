//! Batch scoring command.

use std::path::Path;

use palate_engine::{dedup_exact, rank_and_cap, score_records, summarize, FlavorMatcher};

use crate::dataset::{write_scored, Dataset, COL_FLAVORS, COL_USER_FLAVOR};

/// Score every row of `input`, apply the dedup/rank/cap policy, write the
/// result to `output`, and print summary counts.
///
/// # Errors
///
/// Returns an error if the dataset is missing required columns, a row
/// cannot be read, or the embedding endpoint fails.
pub(crate) async fn run_score(
    matcher: &FlavorMatcher,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let dataset = Dataset::load(input, &[COL_FLAVORS, COL_USER_FLAVOR])?;
    let inputs = dataset.inputs();

    let scored = score_records(matcher, &inputs).await?;
    let rows = rank_and_cap(dedup_exact(scored));
    write_scored(output, dataset.headers(), &rows)?;

    let summary = summarize(&rows);
    println!("Edible dishes: {}", summary.edible_count);
    println!("Potentially spoiled dishes: {}", summary.spoiled_count);
    match summary.spoiled_mean {
        Some(mean) => println!("Mean match score (Potentially Spoiled): {mean:.2}"),
        None => println!("Mean match score (Potentially Spoiled): n/a"),
    }
    match summary.spoiled_median {
        Some(median) => println!("Median match score (Potentially Spoiled): {median:.2}"),
        None => println!("Median match score (Potentially Spoiled): n/a"),
    }

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows = rows.len(),
        "batch scoring complete"
    );
    Ok(())
}
