//! Example demonstrating a substituted morphological analyzer
//!
//! The pipeline depends only on the MorphAnalyzer contract, so any analyzer
//! implementation can be plugged in. This example wires a toy suffix-based
//! analyzer into the lemma filter and compares it with the dictionary one.

use std::sync::Arc;

use morfema::TextNormalizer;
use morfema::morphology::{DictionaryMorphology, MorphAnalyzer, Parse};

/// A toy analyzer that guesses the lemma by chopping inflectional endings.
struct SuffixGuesser;

impl MorphAnalyzer for SuffixGuesser {
    fn parse(&self, word: &str) -> Vec<Parse> {
        for suffix in ["ами", "ого", "ему", "ые", "ов", "ам", "ах", "ы", "и", "а", "у"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= 3 {
                    return vec![Parse::new(stem, 0.5)];
                }
            }
        }
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "suffix_guesser"
    }
}

fn main() -> morfema::error::Result<()> {
    println!("=== Custom Morphology Example ===\n");

    let words: Vec<String> = ["коты", "столами", "мир"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Dictionary analyzer: exact matches, everything else falls back.
    let dictionary = Arc::new(DictionaryMorphology::from_pairs(vec![("коты", "кот")]));
    let normalizer = TextNormalizer::new(dictionary)?;
    println!("dictionary: {:?}", normalizer.normalize(&words)?);

    // Suffix guesser: no dictionary at all, pure heuristics.
    let normalizer = TextNormalizer::new(Arc::new(SuffixGuesser))?;
    println!("suffix_guesser: {:?}", normalizer.normalize(&words)?);

    Ok(())
}
