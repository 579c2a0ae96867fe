// File: src/core/types.rs
use crate::core::matcher::AnswerMatcher;
use std::fmt;

/// Identity of one quizzable prompt.
///
/// A bare string is not enough: Spanish "pan" (bread) and Czech "pan" (sir)
/// share a spelling but are different prompts, so the direction is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId {
    pub word: String,
    /// True if the word is in the language being learned.
    pub new_lang: bool,
}

impl WordId {
    pub fn new(word: impl Into<String>, new_lang: bool) -> Self {
        Self { word: word.into(), new_lang }
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.new_lang {
            write!(f, "{}_from", self.word)
        } else {
            write!(f, "{}_to", self.word)
        }
    }
}

/// A prompt together with every answer accepted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub from: String,
    pub to: Vec<String>,
}

impl Word {
    /// Returns true if `input` matches any of the accepted answers.
    pub fn test(&self, input: &str, matcher: &AnswerMatcher) -> bool {
        self.to.iter().any(|expected| matcher.matches(input, expected))
    }
}
