/// Edibility verdict derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edibility {
    Edible,
    PotentiallySpoiled,
}

/// Scores at or below this threshold are classified `PotentiallySpoiled`.
pub const EDIBILITY_THRESHOLD: f64 = 0.75;

impl Edibility {
    /// Classify a match score. The boundary is exclusive: exactly 0.75 is
    /// `PotentiallySpoiled`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > EDIBILITY_THRESHOLD {
            Edibility::Edible
        } else {
            Edibility::PotentiallySpoiled
        }
    }
}

impl std::fmt::Display for Edibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edibility::Edible => write!(f, "Edible"),
            Edibility::PotentiallySpoiled => write!(f, "Potentially Spoiled"),
        }
    }
}

/// One dish's score against its full reference flavor set.
#[derive(Debug, Clone, PartialEq)]
pub struct DishScore {
    /// Best match score across all reference labels, in `[0.0, 1.0]`.
    pub score: f64,
    /// The reference label that achieved the best score. First label wins
    /// ties; empty string when the reference set itself was empty.
    pub best_flavor: String,
    pub edibility: Edibility,
}

/// One input row of a batch dataset.
///
/// `fields` holds the raw CSV cells in column order so that unknown columns
/// pass through the pipeline untouched; `flavors` and `user_flavor` are the
/// parsed cells the engine consumes.
#[derive(Debug, Clone)]
pub struct DishInput {
    pub fields: Vec<String>,
    /// Comma-space-separated reference flavor labels.
    pub flavors: String,
    /// Free-text flavor description.
    pub user_flavor: String,
}

/// A scored batch row: the input fields plus the two derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDish {
    pub fields: Vec<String>,
    pub score: f64,
    pub edibility: Edibility,
}

/// Aggregate counts reported after a batch run. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub edible_count: usize,
    pub spoiled_count: usize,
    /// Mean match score of the `PotentiallySpoiled` group; `None` if empty.
    pub spoiled_mean: Option<f64>,
    /// Median match score of the `PotentiallySpoiled` group; `None` if empty.
    pub spoiled_median: Option<f64>,
}
