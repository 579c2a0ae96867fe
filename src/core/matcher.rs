// File: src/core/matcher.rs
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares typed answers against expected ones.
///
/// Comparison ignores surrounding whitespace and case, and by default also
/// ignores accents: "Espana" is accepted for "España".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerMatcher {
    /// Drop combining marks after canonical decomposition.
    pub strip_marks: bool,
}

impl Default for AnswerMatcher {
    fn default() -> Self {
        Self { strip_marks: true }
    }
}

impl AnswerMatcher {
    pub fn new(strip_marks: bool) -> Self {
        Self { strip_marks }
    }

    /// Trim, lowercase, decompose, optionally strip marks, recompose.
    pub fn normalize(&self, s: &str) -> String {
        let lowered = s.trim().to_lowercase();
        if self.strip_marks {
            lowered
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .nfc()
                .collect()
        } else {
            lowered.nfc().collect()
        }
    }

    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        self.normalize(actual) == self.normalize(expected)
    }
}
