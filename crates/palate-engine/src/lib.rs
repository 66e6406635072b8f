//! Flavor-matching and scoring engine for palate.
//!
//! Takes a free-text description of a perceived flavor and a set of
//! predicted flavor labels, expands the labels through a thesaurus, and
//! reduces keyword-vs-label similarity (exact, fuzzy, semantic) to a single
//! match score in `[0.0, 1.0]` plus an edibility label. Used by the batch
//! CSV scorer and the interactive single-dish query tool.

pub mod annotate;
pub mod embeddings;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod similarity;
pub mod thesaurus;
pub mod types;
pub mod vocabulary;

pub use annotate::{extract_keywords, RuleTagger, TextAnnotator};
pub use embeddings::EmbedClient;
pub use engine::FlavorMatcher;
pub use error::EngineError;
pub use pipeline::{dedup_exact, rank_and_cap, score_records, summarize, MAX_OUTPUT_ROWS};
pub use similarity::SimilarityScorer;
pub use thesaurus::{expand, LexiconThesaurus, Thesaurus};
pub use types::{BatchSummary, DishInput, DishScore, Edibility, ScoredDish};
pub use vocabulary::map_ingredient_flavors;
