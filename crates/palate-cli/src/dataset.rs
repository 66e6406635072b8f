//! CSV dataset loading and saving.
//!
//! Columns the engine does not know about pass through untouched: rows are
//! kept as raw field vectors and the known columns are resolved by header
//! index once at load time. Each driver states the columns it requires and
//! loading fails fast, naming every missing column at once.

use std::path::Path;

use anyhow::{bail, Context};
use palate_engine::{DishInput, ScoredDish};

pub(crate) const COL_FLAVORS: &str = "flavors";
pub(crate) const COL_USER_FLAVOR: &str = "user_flavor";
pub(crate) const COL_DISH_NAME: &str = "dish_name";

/// A loaded CSV table with resolved column indexes.
#[derive(Debug)]
pub(crate) struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    flavors_idx: Option<usize>,
    user_flavor_idx: Option<usize>,
    dish_name_idx: Option<usize>,
}

impl Dataset {
    /// Load a dataset, failing fast if any of `required` columns is
    /// missing.
    pub(crate) fn load(path: &Path, required: &[&str]) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .from_path(path)
            .with_context(|| format!("cannot open dataset {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .context("dataset has no header row")?
            .iter()
            .map(ToString::to_string)
            .collect();

        let find = |name: &str| headers.iter().position(|h| h == name);
        let missing: Vec<&str> = required
            .iter()
            .filter(|name| find(name).is_none())
            .copied()
            .collect();
        if !missing.is_empty() {
            bail!(
                "dataset {} is missing required columns: {}",
                path.display(),
                missing.join(", ")
            );
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.with_context(|| format!("bad row in {}", path.display()))?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }

        Ok(Self {
            flavors_idx: find(COL_FLAVORS),
            user_flavor_idx: find(COL_USER_FLAVOR),
            dish_name_idx: find(COL_DISH_NAME),
            headers,
            rows,
        })
    }

    pub(crate) fn headers(&self) -> &[String] {
        &self.headers
    }

    fn cell<'a>(&self, fields: &'a [String], idx: Option<usize>) -> &'a str {
        idx.and_then(|i| fields.get(i)).map_or("", String::as_str)
    }

    /// Scoring inputs, one per row, in file order.
    pub(crate) fn inputs(&self) -> Vec<DishInput> {
        self.rows
            .iter()
            .map(|fields| DishInput {
                fields: fields.clone(),
                flavors: self.cell(fields, self.flavors_idx).to_string(),
                user_flavor: self.cell(fields, self.user_flavor_idx).to_string(),
            })
            .collect()
    }

    /// All dish names, in file order.
    pub(crate) fn dish_names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|fields| self.cell(fields, self.dish_name_idx))
            .collect()
    }

    /// The `flavors` cell of the first row whose dish name matches
    /// case-insensitively.
    pub(crate) fn flavors_for_dish(&self, dish_name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|fields| {
                self.cell(fields, self.dish_name_idx)
                    .eq_ignore_ascii_case(dish_name)
            })
            .map(|fields| self.cell(fields, self.flavors_idx))
    }
}

/// Write scored rows: the original columns plus `edibility` and
/// `match_score`.
pub(crate) fn write_scored(
    path: &Path,
    headers: &[String],
    rows: &[ScoredDish],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create output {}", path.display()))?;

    let mut out_headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    out_headers.push("edibility");
    out_headers.push("match_score");
    writer.write_record(&out_headers)?;

    for row in rows {
        let mut record: Vec<String> = row.fields.clone();
        record.push(row.edibility.to_string());
        record.push(row.score.to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
