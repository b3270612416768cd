use regex::Regex;

use super::{CharFilter, Transformation};

/// Default pattern for angle-bracket-delimited markup tags.
const DEFAULT_TAG_PATTERN: &str = r"<[^>]+>";

/// A char filter that deletes markup tags from the text.
///
/// Matches are non-overlapping and leftmost-first, each replaced with the
/// empty string. The pattern does not support nesting: a `>` inside an
/// attribute value terminates the tag early and the remainder survives into
/// the tokenizer. This is documented, accepted behavior.
pub struct TagStripCharFilter {
    pattern: Regex,
}

impl TagStripCharFilter {
    /// Create a tag strip filter with the default tag pattern.
    pub fn new() -> crate::error::Result<Self> {
        Self::with_pattern(DEFAULT_TAG_PATTERN)
    }

    /// Create a tag strip filter with a custom pattern.
    pub fn with_pattern(pattern: &str) -> crate::error::Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| crate::error::MorfemaError::Anyhow(anyhow::Error::from(e)))?,
        })
    }

    /// Get the pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for TagStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            // Deletion always changes length, so every match is recorded.
            let cut = output.len();
            transformations.push(Transformation::new(m.start(), m.end(), cut, cut));

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "tag_strip"
    }
}
