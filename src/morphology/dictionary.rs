//! Dictionary-backed morphological analyzer.
//!
//! Maps word forms to ranked normal forms using an in-memory table. The
//! dictionary can be built programmatically or loaded from a JSON file at
//! startup; a missing or unparsable file is a fatal construction error.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;

use super::{MorphAnalyzer, Parse};
use crate::error::{MorfemaError, Result};

/// A morphological analyzer backed by an exact-match dictionary.
///
/// Each word form maps to a ranked list of normal forms, best first. Keys are
/// stored lowercase; lookup is exact on the lowercase form. Unknown forms
/// yield no parses, leaving the fallback decision to the caller.
///
/// # Dictionary file format
///
/// A JSON object mapping each word form to an array of normal forms, ranked
/// best-first:
///
/// ```json
/// {
///   "коты": ["кот"],
///   "стали": ["стать", "сталь"]
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DictionaryMorphology {
    /// form -> ranked parses, best first
    entries: Arc<AHashMap<String, Vec<Parse>>>,
}

impl DictionaryMorphology {
    /// Build a dictionary from (form, normal form) pairs.
    ///
    /// Multiple pairs with the same form accumulate in insertion order, so
    /// the first pair for a form supplies its top-ranked normal form.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut grouped: AHashMap<String, Vec<String>> = AHashMap::new();
        for (form, normal) in pairs {
            grouped
                .entry(form.into().to_lowercase())
                .or_default()
                .push(normal.into());
        }
        Self::from_entries(grouped)
    }

    /// Build a dictionary from form -> ranked normal forms entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let map: AHashMap<String, Vec<Parse>> = entries
            .into_iter()
            .map(|(form, normals)| {
                let count = normals.len();
                let parses = normals
                    .into_iter()
                    .enumerate()
                    .map(|(rank, normal)| {
                        Parse::new(normal, (count - rank) as f32 / count as f32)
                    })
                    .collect();
                (form.into().to_lowercase(), parses)
            })
            .collect();

        DictionaryMorphology {
            entries: Arc::new(map),
        }
    }

    /// Load a dictionary from a JSON file.
    ///
    /// The file must contain an object mapping word forms to arrays of
    /// normal forms. A missing or unparsable file is a fatal error: the
    /// analyzer cannot be constructed without its dictionary.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MorfemaError::morphology(format!(
                "Failed to read dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let entries: std::collections::HashMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| {
                MorfemaError::morphology(format!(
                    "Failed to parse dictionary JSON from '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self::from_entries(entries))
    }

    /// Get the number of word forms in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for DictionaryMorphology {
    fn parse(&self, word: &str) -> Vec<Parse> {
        self.entries.get(word).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
