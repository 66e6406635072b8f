//! Canonical flavor vocabulary and the ingredient-to-flavor mapping path.
//!
//! Used when reference labels must be derived from raw ingredient text
//! rather than supplied by a prior prediction step.

use crate::similarity::partial_ratio;

/// Canonical flavor terms: the five basic tastes plus descriptive variants.
pub const CANONICAL_FLAVORS: &[&str] = &[
    "sweet", "sugary", "caramelized", "honeyed",
    "spicy", "hot", "pungent", "peppery",
    "savory", "umami", "meaty", "brothy",
    "sour", "tangy", "tart", "acidic",
    "bitter", "astringent", "sharp",
    "salty", "briny", "cured",
    "fruity", "citrusy", "herbal", "earthy",
    "nutty", "smoky", "creamy", "buttery",
];

/// Minimum windowed-ratio for an ingredient to map onto a flavor term.
const MATCH_THRESHOLD: f64 = 0.8;

/// Map a comma-separated ingredient list onto canonical flavor labels.
///
/// Each ingredient is fuzzily matched against every vocabulary term; terms
/// scoring above the threshold are collected in vocabulary order without
/// duplicates. An ingredient list matching nothing yields `["unknown"]`.
#[must_use]
pub fn map_ingredient_flavors(ingredients: &str) -> Vec<String> {
    let ingredient_list: Vec<&str> = ingredients
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut matched = Vec::new();
    for flavor in CANONICAL_FLAVORS {
        let hit = ingredient_list
            .iter()
            .any(|ing| partial_ratio(ing, flavor) > MATCH_THRESHOLD);
        if hit && !matched.contains(&(*flavor).to_string()) {
            matched.push((*flavor).to_string());
        }
    }

    if matched.is_empty() {
        matched.push("unknown".to_string());
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_flavor_term_maps_onto_vocabulary() {
        let flavors = map_ingredient_flavors("smoky bacon, flour");
        assert!(flavors.contains(&"smoky".to_string()), "got {flavors:?}");
    }

    #[test]
    fn unmatched_ingredients_fall_back_to_unknown() {
        assert_eq!(map_ingredient_flavors("water, ice"), vec!["unknown"]);
    }

    #[test]
    fn empty_cell_is_unknown() {
        assert_eq!(map_ingredient_flavors(""), vec!["unknown"]);
    }

    #[test]
    fn matches_are_in_vocabulary_order_without_duplicates() {
        let flavors = map_ingredient_flavors("honeyed nuts, sugary syrup, sugary glaze");
        let sugary_pos = flavors.iter().position(|f| f == "sugary");
        let honeyed_pos = flavors.iter().position(|f| f == "honeyed");
        assert!(sugary_pos.is_some() && honeyed_pos.is_some(), "got {flavors:?}");
        assert!(sugary_pos < honeyed_pos);
        assert_eq!(
            flavors.iter().filter(|f| *f == "sugary").count(),
            1,
            "got {flavors:?}"
        );
    }
}
