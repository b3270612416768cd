//! Example demonstrating the full Russian normalization pipeline
//!
//! This example walks through the four operations one by one, then runs the
//! same text through the all-in-one RussianAnalyzer.

use std::sync::Arc;

use morfema::TextNormalizer;
use morfema::analysis::analyzer::{Analyzer, RussianAnalyzer};
use morfema::morphology::DictionaryMorphology;

fn main() -> morfema::error::Result<()> {
    println!("=== Russian Pipeline Example ===\n");

    let morphology = Arc::new(DictionaryMorphology::load_from_file("data/ru_lemmas.json")?);
    println!(
        "Loaded dictionary with {} word forms\n",
        morphology.len()
    );

    let normalizer = TextNormalizer::new(morphology.clone())?;

    let text = "<p>Я иду домой, а <b>коты бежали</b> через сад!</p>";
    println!("Input: {text}\n");

    // Step 1: tokenize (case preserved, markup characters separate tokens)
    let tokens = normalizer.tokenize(text)?;
    println!("1. tokenize:          {tokens:?}");

    // Step 2: clean (tags stripped, lowercased)
    let cleaned = normalizer.clean(text)?;
    println!("2. clean:             {cleaned:?}");

    // Step 3: drop stop words
    let content = normalizer.remove_stop_words(&cleaned);
    println!("3. remove_stop_words: {content:?}");

    // Step 4: reduce to dictionary forms
    let lemmas = normalizer.normalize(&content)?;
    println!("4. normalize:         {lemmas:?}\n");

    // The same pipeline as a single analyzer
    let analyzer = RussianAnalyzer::with_morphology(morphology)?;
    let tokens: Vec<_> = analyzer.analyze(text)?.collect();

    println!("RussianAnalyzer tokens:");
    for token in &tokens {
        println!(
            "  - \"{}\" (position: {}, offsets: {}..{})",
            token.text, token.position, token.start_offset, token.end_offset
        );
    }

    Ok(())
}
