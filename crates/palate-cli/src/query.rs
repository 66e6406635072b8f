//! Interactive single-dish query command.
//!
//! Flow: fuzzy dish-name lookup, optional numeric disambiguation, flavor
//! description prompt, one scoring pass, printed verdict. Invalid input
//! aborts the query; the user re-runs the command.

use std::io::Write;
use std::path::Path;

use palate_engine::similarity::partial_ratio;
use palate_engine::{engine::parse_labels, FlavorMatcher};

use crate::dataset::{Dataset, COL_DISH_NAME, COL_FLAVORS};

/// Candidates below this ratio are not offered.
const DISH_MATCH_THRESHOLD: f64 = 0.6;
/// At most this many candidates are offered for disambiguation.
const DISH_MATCH_LIMIT: usize = 5;

/// Rank dish names by fuzzy similarity to the query and keep the top
/// candidates above the threshold, best first. The windowed ratio lets a
/// short query match a longer dish name it is embedded in; an empty query
/// matches nothing.
fn find_similar_dishes<'a>(query: &str, dish_names: &[&'a str]) -> Vec<&'a str> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let mut ranked: Vec<(&str, f64)> = dish_names
        .iter()
        .map(|name| (*name, partial_ratio(query, name)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(DISH_MATCH_LIMIT)
        .filter(|(_, score)| *score > DISH_MATCH_THRESHOLD)
        .map(|(name, _)| name)
        .collect()
}

/// Parse a 1-based candidate choice. `None` for non-numeric or
/// out-of-range input.
fn parse_choice(input: &str, candidate_count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if choice >= 1 && choice <= candidate_count {
        Some(choice - 1)
    } else {
        None
    }
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Run one interactive query against the dataset.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the embedding
/// endpoint fails. Invalid user input is reported and ends the query
/// without an error.
pub(crate) async fn run_query(matcher: &FlavorMatcher, dataset_path: &Path) -> anyhow::Result<()> {
    let dataset = Dataset::load(dataset_path, &[COL_DISH_NAME, COL_FLAVORS])?;
    let dish_names = dataset.dish_names();

    let query = prompt("Enter the name of the dish: ")?;
    let candidates = find_similar_dishes(&query, &dish_names);

    if candidates.is_empty() {
        println!("No dishes found similar to '{query}'. Please try again.");
        return Ok(());
    }

    let selected = if candidates.len() > 1 {
        println!("Which of the following dish names is the closest to your dish?");
        for (idx, dish) in candidates.iter().enumerate() {
            println!("{}. {dish}", idx + 1);
        }
        let raw = prompt("Enter the number corresponding to your dish: ")?;
        match parse_choice(&raw, candidates.len()) {
            Some(idx) => candidates[idx],
            None => {
                println!("Invalid choice. Please try again.");
                return Ok(());
            }
        }
    } else {
        candidates[0]
    };

    let Some(flavors) = dataset.flavors_for_dish(selected) else {
        println!("No flavor data recorded for '{selected}'.");
        return Ok(());
    };
    let labels = parse_labels(flavors);

    let description = prompt(&format!(
        "What does the taste of {selected} feel like? Describe it: "
    ))?;

    let result = matcher.score_dish(&description, &labels).await?;

    println!();
    println!("Dish Name: {selected}");
    println!("Your Flavor Input: {description}");
    println!("Predicted Flavor: {}", result.best_flavor);
    println!("Match Score: {:.2}", result.score);
    println!("Edibility: {}", result.edibility);
    Ok(())
}
