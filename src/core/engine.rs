// File: src/core/engine.rs
use crate::config::DrillConfig;
use crate::core::matcher::AnswerMatcher;
use crate::core::types::{Word, WordId};
use crate::core::vocabulary::Vocabulary;
use crate::error::{DrillError, Result};
use crate::loader::{load_vocabulary_from_dir, load_vocabulary_from_file};
use crate::persistence::save_stats;
use std::path::{Path, PathBuf};
use tracing::info;

// The drill session is composed of the sampler, the answer matcher and the
// place its statistics are flushed to.
pub struct DrillEngine {
    vocabulary: Vocabulary,
    matcher: AnswerMatcher,
    stats_dir: PathBuf,
}

impl DrillEngine {
    pub fn new(vocabulary: Vocabulary, matcher: AnswerMatcher, stats_dir: impl Into<PathBuf>) -> Self {
        Self {
            vocabulary,
            matcher,
            stats_dir: stats_dir.into(),
        }
    }

    /// Loads the lessons named by `config` together with their stored stats.
    pub fn from_config(config: &DrillConfig) -> Result<Self> {
        let vocabulary = match &config.file {
            Some(file) => load_vocabulary_from_file(file, config.memory_capacity, config.seed)?,
            None => load_vocabulary_from_dir(
                &config.data_dir,
                config.lesson.as_deref(),
                config.memory_capacity,
                config.seed,
            )?,
        };
        if vocabulary.is_empty() {
            let source = config.file.as_deref().unwrap_or(&config.data_dir);
            return Err(DrillError::EmptyVocabulary(source.to_path_buf()));
        }

        let matcher = AnswerMatcher::new(!config.strict_accents);
        info!(words = vocabulary.len(), stats_dir = %config.stats_dir().display(), "drill ready");
        Ok(Self::new(vocabulary, matcher, config.stats_dir()))
    }

    pub fn next_prompt(&mut self) -> Option<Word> {
        self.vocabulary.next_word()
    }

    /// Checks `input` against `word` and records the outcome.
    pub fn submit(&mut self, word: &Word, input: &str) -> bool {
        let correct = word.test(input, &self.matcher);
        if correct {
            self.vocabulary.record_success(&word.id);
        } else {
            self.vocabulary.record_failure(&word.id);
        }
        correct
    }

    pub fn success_rate(&self, id: &WordId) -> f64 {
        self.vocabulary.stat(id).success_rate()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn stats_dir(&self) -> &Path {
        &self.stats_dir
    }

    pub fn save_stats(&self) -> Result<()> {
        save_stats(self.vocabulary.stats(), &self.stats_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::WordStat;
    use crate::persistence::load_stats;
    use std::collections::HashMap;

    fn engine_in(dir: &Path) -> DrillEngine {
        let word = Word {
            id: WordId::new("árbol", true),
            from: "árbol".to_string(),
            to: vec!["tree".to_string()],
        };
        let vocabulary = Vocabulary::with_seed(vec![word], &HashMap::new(), 5, 1);
        DrillEngine::new(vocabulary, AnswerMatcher::default(), dir)
    }

    #[test]
    fn answers_are_recorded_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_in(dir.path());

        let word = engine.next_prompt().unwrap();
        assert!(engine.submit(&word, "Tree"));
        assert!(!engine.submit(&word, "three"));
        assert_eq!(engine.success_rate(&word.id), 0.5);

        engine.save_stats().unwrap();
        assert_eq!(load_stats(dir.path())[&word.id], WordStat::new(1, 1));
    }

    #[test]
    fn empty_lesson_directory_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let config = DrillConfig {
            data_dir: dir.path().to_path_buf(),
            ..DrillConfig::default()
        };
        assert!(matches!(
            DrillEngine::from_config(&config),
            Err(DrillError::EmptyVocabulary(_))
        ));
    }
}
