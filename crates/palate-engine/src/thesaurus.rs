//! Synonym expansion for reference flavor labels.
//!
//! The dictionary behind [`Thesaurus`] is a pluggable snapshot: the
//! built-in lexicon covers the canonical flavor vocabulary, and a JSON
//! file (`{"word": ["synonym", ...]}`) can replace it wholesale. For a
//! fixed snapshot, lookups are deterministic.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use crate::error::EngineError;

/// Lexical synonym lookup. Returns a finite, possibly empty set;
/// an unknown word is not an error.
pub trait Thesaurus {
    fn synonyms(&self, word: &str) -> BTreeSet<String>;
}

/// Built-in synonym table for the flavor domain. Forms are lowercase;
/// multi-word lemmas use plain spaces.
const FLAVOR_LEXICON: &[(&str, &[&str])] = &[
    ("sweet", &["sugary", "saccharine", "honeyed", "candied", "syrupy"]),
    ("sugary", &["sweet", "saccharine"]),
    ("caramelized", &["caramel", "browned", "toasted"]),
    ("spicy", &["hot", "pungent", "peppery", "fiery", "zesty"]),
    ("hot", &["spicy", "fiery", "burning"]),
    ("pungent", &["sharp", "acrid", "piquant"]),
    ("savory", &["umami", "meaty", "brothy", "hearty"]),
    ("umami", &["savory", "meaty", "brothy"]),
    ("meaty", &["savory", "umami", "fleshy"]),
    ("sour", &["tangy", "tart", "acidic", "vinegary"]),
    ("tangy", &["sour", "tart", "zesty"]),
    ("tart", &["sour", "tangy", "acidic"]),
    ("acidic", &["sour", "tart", "sharp"]),
    ("bitter", &["astringent", "sharp", "acrid", "harsh"]),
    ("astringent", &["bitter", "puckery"]),
    ("salty", &["briny", "brackish", "cured", "saline"]),
    ("briny", &["salty", "saline"]),
    ("fruity", &["citrusy", "berry", "jammy"]),
    ("citrusy", &["fruity", "lemony", "zesty"]),
    ("herbal", &["grassy", "leafy", "botanical"]),
    ("earthy", &["musty", "mushroomy", "mineral"]),
    ("nutty", &["almondy", "toasty"]),
    ("smoky", &["charred", "woody", "burnt", "barbecued"]),
    ("creamy", &["buttery", "velvety", "milky", "smooth"]),
    ("buttery", &["creamy", "rich"]),
    ("bland", &["flavorless", "tasteless", "insipid", "flat", "mild"]),
];

/// In-memory thesaurus snapshot.
pub struct LexiconThesaurus {
    entries: HashMap<String, BTreeSet<String>>,
}

impl LexiconThesaurus {
    /// Build the thesaurus from the built-in flavor lexicon.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = FLAVOR_LEXICON
            .iter()
            .map(|&(word, syns)| {
                let set = syns.iter().map(|s| normalize_lemma(s)).collect();
                (word.to_string(), set)
            })
            .collect();
        Self { entries }
    }

    /// Load a snapshot from a JSON file mapping each word to an array of
    /// synonym strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Thesaurus`] if the file cannot be read or is
    /// not valid JSON of the expected shape.
    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Thesaurus(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Thesaurus`] on malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let parsed: HashMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| EngineError::Thesaurus(format!("malformed snapshot: {e}")))?;
        let entries = parsed
            .into_iter()
            .map(|(word, syns)| {
                let set = syns.iter().map(|s| normalize_lemma(s)).collect();
                (word.to_lowercase(), set)
            })
            .collect();
        Ok(Self { entries })
    }
}

impl Thesaurus for LexiconThesaurus {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// Lowercase a lemma and flatten underscores to spaces.
fn normalize_lemma(lemma: &str) -> String {
    lemma.to_lowercase().replace('_', " ")
}

/// Expand a reference flavor set with synonyms for every member.
///
/// The result always contains the lowercased originals; lookups that find
/// nothing contribute nothing. Called once per dish, so expansion cost is
/// amortized across all keywords of one description.
#[must_use]
pub fn expand(thesaurus: &dyn Thesaurus, labels: &[String]) -> HashSet<String> {
    let mut expanded = HashSet::new();
    for label in labels {
        let label = label.trim().to_lowercase();
        expanded.extend(thesaurus.synonyms(&label));
        expanded.insert(label);
    }
    expanded
}
