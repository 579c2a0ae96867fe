// File: src/loader/vocabulary.rs
use crate::core::types::{Word, WordId};
use crate::core::vocabulary::Vocabulary;
use crate::error::Result;
use crate::loader::lessons::{load_lesson, load_lessons, Row};
use crate::persistence::load_stats;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Loads a single lesson file, with stats from the file's directory.
pub fn load_vocabulary_from_file(
    path: &Path,
    memory_capacity: usize,
    seed: Option<u64>,
) -> Result<Vocabulary> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let rows = load_lesson(path)?;
    Ok(build(&rows, dir, memory_capacity, seed))
}

/// Loads every lesson in `dir` (or just `lesson`), with stats from `dir`.
pub fn load_vocabulary_from_dir(
    dir: &Path,
    lesson: Option<&str>,
    memory_capacity: usize,
    seed: Option<u64>,
) -> Result<Vocabulary> {
    let rows = load_lessons(dir, lesson)?;
    Ok(build(&rows, dir, memory_capacity, seed))
}

fn build(rows: &[Row], stats_dir: &Path, memory_capacity: usize, seed: Option<u64>) -> Vocabulary {
    let words = to_words(rows);
    let stats = load_stats(stats_dir);
    info!(words = words.len(), known_stats = stats.len(), "vocabulary loaded");

    match seed {
        Some(seed) => Vocabulary::with_seed(words, &stats, memory_capacity, seed),
        None => Vocabulary::new(words, &stats, memory_capacity),
    }
}

/// Turns lesson rows into prompts for both directions.
///
/// A row `new;knownA;knownB` asks `new` expecting either known word, and asks
/// each known word expecting `new`. Answers accumulate across rows. Words come
/// back in order of first appearance, new-language words first.
pub fn to_words(rows: &[Row]) -> Vec<Word> {
    let mut new_lang = Accumulator::default();
    let mut known_lang = Accumulator::default();

    for row in rows {
        let Some((first, rest)) = row.split_first() else {
            continue;
        };
        let new_word = first.trim();
        if new_word.is_empty() {
            continue;
        }
        for raw in rest {
            let known_word = raw.trim();
            if known_word.is_empty() {
                continue;
            }
            new_lang.add(WordId::new(new_word, true), known_word);
            known_lang.add(WordId::new(known_word, false), new_word);
        }
    }

    new_lang.into_words().chain(known_lang.into_words()).collect()
}

#[derive(Default)]
struct Accumulator {
    index: HashMap<WordId, usize>,
    entries: Vec<(WordId, Vec<String>)>,
}

impl Accumulator {
    fn add(&mut self, id: WordId, answer: &str) {
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, Vec::new()));
                self.entries.len() - 1
            }
        };
        let answers = &mut self.entries[slot].1;
        if !answers.iter().any(|a| a == answer) {
            answers.push(answer.to_string());
        }
    }

    fn into_words(self) -> impl Iterator<Item = Word> {
        self.entries.into_iter().map(|(id, to)| Word {
            from: id.word.clone(),
            id,
            to,
        })
    }
}
