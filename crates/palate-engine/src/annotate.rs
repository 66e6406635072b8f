//! Keyword extraction from free-text flavor descriptions.
//!
//! The engine only needs the descriptive content words of a sentence, so the
//! tagger behind [`TextAnnotator`] is swappable: the default [`RuleTagger`]
//! is rule-based, but a heavier model-backed tagger can be dropped in
//! without touching the match engine.

use std::sync::LazyLock;

use regex::Regex;

/// Part-of-speech tag assigned at annotation time. Only adjectives and
/// nouns survive keyword extraction; the tag itself is not retained
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Noun,
    Other,
}

/// A single lowercase token with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

/// Tokenizes text and assigns a part-of-speech tag to every token.
pub trait TextAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token>;
}

/// Function words and common copular/perception verbs that carry no flavor
/// content. Anything here is tagged [`PosTag::Other`] and dropped by
/// keyword extraction.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "it", "its", "i", "me", "my", "we", "our",
    "you", "your", "he", "she", "they", "them", "their", "and", "or", "but", "nor", "so", "yet",
    "of", "in", "on", "at", "to", "for", "with", "by", "from", "as", "than", "too", "very",
    "quite", "really", "rather", "somewhat", "is", "am", "are", "was", "were", "be", "been",
    "being", "has", "have", "had", "do", "does", "did", "can", "could", "will", "would", "should",
    "may", "might", "must", "not", "no", "there", "here", "when", "while", "if", "like",
    "tastes", "tasted", "tasting", "feels", "felt", "feeling", "smells", "smelled", "smelling",
    "seems", "seemed", "looks", "looked",
];

/// Flavor adjectives that no suffix rule catches.
const ADJECTIVE_LEXICON: &[&str] = &[
    "sweet", "sour", "bitter", "bland", "hot", "sharp", "rich", "mild", "fresh", "stale",
    "rancid", "crisp", "tart", "dry", "moist", "tender", "tough", "ripe", "raw", "warm", "cold",
    "thick", "thin", "strong", "weak", "dull", "plain", "sugary",
];

/// Suffixes that mark a content word as an adjective.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "y", "ous", "ful", "ic", "al", "ish", "ive", "less", "ed", "able", "ible",
];

/// Word tokenizer: runs of letters, with one optional internal apostrophe.
/// The pattern is a literal, so compilation cannot fail.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+(?:'[a-zA-Z]+)?").expect("valid word regex"));

/// Rule-based tagger: lowercase word tokens, stopword filtering, adjective
/// detection by lexicon and suffix, everything else tagged as a noun.
pub struct RuleTagger;

impl RuleTagger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> PosTag {
        if STOPWORDS.contains(&word) {
            return PosTag::Other;
        }
        if ADJECTIVE_LEXICON.contains(&word)
            || ADJECTIVE_SUFFIXES.iter().any(|s| word.len() > s.len() + 1 && word.ends_with(s))
        {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnnotator for RuleTagger {
    fn annotate(&self, text: &str) -> Vec<Token> {
        WORD_RE
            .find_iter(text)
            .map(|m| {
                let word = m.as_str().to_lowercase();
                let tag = Self::tag_word(&word);
                Token { text: word, tag }
            })
            .collect()
    }
}

/// Extract descriptive keywords (adjectives and nouns) from a sentence.
///
/// Order follows sentence order and duplicates are kept; downstream
/// aggregation is max-based so repeats are harmless. Empty input yields an
/// empty Vec, never an error.
pub fn extract_keywords(annotator: &dyn TextAnnotator, text: &str) -> Vec<String> {
    annotator
        .annotate(text)
        .into_iter()
        .filter(|t| matches!(t.tag, PosTag::Adjective | PosTag::Noun))
        .map(|t| t.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_keywords() {
        let tagger = RuleTagger::new();
        assert!(extract_keywords(&tagger, "").is_empty());
    }

    #[test]
    fn whitespace_and_punctuation_only_yields_no_keywords() {
        let tagger = RuleTagger::new();
        assert!(extract_keywords(&tagger, "  ... !!! ").is_empty());
    }

    #[test]
    fn function_words_are_dropped() {
        let tagger = RuleTagger::new();
        let keywords = extract_keywords(&tagger, "This tastes sweet and smoky");
        assert_eq!(keywords, vec!["sweet", "smoky"]);
    }

    #[test]
    fn keywords_are_lowercased_in_sentence_order() {
        let tagger = RuleTagger::new();
        let keywords = extract_keywords(&tagger, "Smoky, Sweet broth");
        assert_eq!(keywords, vec!["smoky", "sweet", "broth"]);
    }

    #[test]
    fn hyphenated_words_split_into_tokens() {
        let tagger = RuleTagger::default();
        let keywords = extract_keywords(&tagger, "semi-sweet chocolate");
        assert_eq!(keywords, vec!["semi", "sweet", "chocolate"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let tagger = RuleTagger::new();
        let keywords = extract_keywords(&tagger, "sweet sweet caramel");
        assert_eq!(keywords, vec!["sweet", "sweet", "caramel"]);
    }

    #[test]
    fn suffix_rule_tags_adjectives() {
        assert_eq!(RuleTagger::tag_word("salty"), PosTag::Adjective);
        assert_eq!(RuleTagger::tag_word("savory"), PosTag::Adjective);
        assert_eq!(RuleTagger::tag_word("metallic"), PosTag::Adjective);
        assert_eq!(RuleTagger::tag_word("caramelized"), PosTag::Adjective);
    }

    #[test]
    fn lexicon_tags_bare_adjectives() {
        assert_eq!(RuleTagger::tag_word("sweet"), PosTag::Adjective);
        assert_eq!(RuleTagger::tag_word("bland"), PosTag::Adjective);
    }

    #[test]
    fn unknown_content_words_default_to_noun() {
        assert_eq!(RuleTagger::tag_word("broth"), PosTag::Noun);
        assert_eq!(RuleTagger::tag_word("umami"), PosTag::Noun);
    }

    #[test]
    fn perception_verbs_are_stopwords() {
        assert_eq!(RuleTagger::tag_word("tastes"), PosTag::Other);
        assert_eq!(RuleTagger::tag_word("seems"), PosTag::Other);
    }
}
