//! Ingredient-to-flavor mapping command.
//!
//! Derives reference flavor labels from raw ingredient lists for datasets
//! that lack a prior flavor prediction.

use std::path::Path;

use anyhow::{bail, Context};
use palate_engine::map_ingredient_flavors;

const COL_DISH_NAME: &str = "dish_name";
const COL_INGREDIENTS: &str = "ingredients";

/// Read `dish_name` + `ingredients` rows from `input` and write
/// `dish_name` + `predicted_flavors` rows to `output`.
///
/// # Errors
///
/// Returns an error if either required column is missing or the files
/// cannot be read/written.
pub(crate) fn run_map(input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(input)
        .with_context(|| format!("cannot open dataset {}", input.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("dataset has no header row")?
        .iter()
        .map(ToString::to_string)
        .collect();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let (Some(dish_idx), Some(ingredients_idx)) = (find(COL_DISH_NAME), find(COL_INGREDIENTS))
    else {
        let missing: Vec<&str> = [
            (COL_DISH_NAME, find(COL_DISH_NAME).is_none()),
            (COL_INGREDIENTS, find(COL_INGREDIENTS).is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();
        bail!(
            "dataset {} is missing required columns: {}",
            input.display(),
            missing.join(", ")
        );
    };

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("cannot create output {}", output.display()))?;
    writer.write_record(["dish_name", "predicted_flavors"])?;

    let mut mapped = 0_usize;
    for record in reader.records() {
        let record = record.with_context(|| format!("bad row in {}", input.display()))?;
        let dish = record.get(dish_idx).unwrap_or_default();
        let ingredients = record.get(ingredients_idx).unwrap_or_default();
        let flavors = map_ingredient_flavors(ingredients);
        writer.write_record([dish, &flavors.join(", ")])?;
        mapped += 1;
    }
    writer.flush()?;

    tracing::info!(rows = mapped, output = %output.display(), "flavor mapping complete");
    println!("Mapped {mapped} dishes to predicted flavors.");
    Ok(())
}
