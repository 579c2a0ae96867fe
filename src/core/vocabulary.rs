// File: src/core/vocabulary.rs
use crate::core::memory::RecencyMemory;
use crate::core::stats::WordStat;
use crate::core::types::{Word, WordId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tracing::debug;

/// How many recent draws are excluded from the next one.
pub const WORD_MEMORY_SIZE: usize = 5;

/// The adaptive word sampler.
///
/// Words the user keeps getting wrong are drawn more often; words drawn in the
/// last few rounds are not drawn again until they leave the recency window.
pub struct Vocabulary {
    stats: HashMap<WordId, WordStat>,
    words: HashMap<WordId, Word>,
    /// Registration order; draws scan the cumulative weights in this order.
    order: Vec<WordId>,
    memory: RecencyMemory<WordId>,
    rng: ChaCha8Rng,
}

impl Vocabulary {
    pub fn new(words: Vec<Word>, prior: &HashMap<WordId, WordStat>, memory_capacity: usize) -> Self {
        Self::with_rng(words, prior, memory_capacity, ChaCha8Rng::from_entropy())
    }

    /// Same as [`Vocabulary::new`] but with a reproducible draw sequence.
    pub fn with_seed(
        words: Vec<Word>,
        prior: &HashMap<WordId, WordStat>,
        memory_capacity: usize,
        seed: u64,
    ) -> Self {
        Self::with_rng(words, prior, memory_capacity, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(
        words: Vec<Word>,
        prior: &HashMap<WordId, WordStat>,
        memory_capacity: usize,
        rng: ChaCha8Rng,
    ) -> Self {
        let mut stats = HashMap::with_capacity(words.len());
        let mut lookup = HashMap::with_capacity(words.len());
        let mut order = Vec::with_capacity(words.len());

        for word in words {
            let id = word.id.clone();
            if lookup.insert(id.clone(), word).is_none() {
                order.push(id.clone());
            }
            stats.insert(id.clone(), prior.get(&id).copied().unwrap_or_default());
        }

        Self {
            stats,
            words: lookup,
            order,
            memory: RecencyMemory::new(memory_capacity),
            rng,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), &HashMap::new(), WORD_MEMORY_SIZE)
    }

    pub fn record_success(&mut self, id: &WordId) {
        let stat = self.stats.entry(id.clone()).or_default();
        *stat = stat.incr_success();
    }

    pub fn record_failure(&mut self, id: &WordId) {
        let stat = self.stats.entry(id.clone()).or_default();
        *stat = stat.incr_failure();
    }

    /// Counters for `id`; unknown words read as an empty record.
    pub fn stat(&self, id: &WordId) -> WordStat {
        self.stats.get(id).copied().unwrap_or_default()
    }

    /// Snapshot of every counter, for the stats store.
    pub fn stats(&self) -> &HashMap<WordId, WordStat> {
        &self.stats
    }

    pub fn word(&self, id: &WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn memory(&self) -> &RecencyMemory<WordId> {
        &self.memory
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Draws the next word to quiz.
    ///
    /// The less successful the user is with a word the more likely it is to
    /// occur. Words in the recency window are skipped unless that leaves
    /// nothing to draw from, in which case the window is ignored for this
    /// draw only. Returns `None` for an empty vocabulary.
    pub fn next_word(&mut self) -> Option<Word> {
        let candidates = self.weighted_candidates();
        if candidates.is_empty() {
            return None;
        }

        let mut cut_offs = Vec::with_capacity(candidates.len());
        let mut total = 0u64;
        for &(_, w) in &candidates {
            total += w;
            cut_offs.push(total);
        }

        let r = self.rng.gen_range(0..total);
        let mut index = self.rng.gen_range(0..candidates.len());
        let found = cut_offs.partition_point(|&cut_off| cut_off <= r);
        if found < cut_offs.len() {
            index = found;
        }

        let id = self.order[candidates[index].0].clone();
        self.memory.push(id.clone());
        self.words.get(&id).cloned()
    }

    /// Positions in `order` of the words the next draw may pick, with their
    /// weights. Weights scale with the whole vocabulary, not the eligible part.
    fn weighted_candidates(&self) -> Vec<(usize, u64)> {
        let vocabulary_size = self.order.len();

        let mut eligible: Vec<usize> = (0..vocabulary_size)
            .filter(|&i| !self.memory.has_recent(&self.order[i]))
            .collect();
        if eligible.is_empty() && vocabulary_size > 0 {
            debug!(vocabulary_size, "every word is recent, drawing from all of them");
            eligible = (0..vocabulary_size).collect();
        }

        eligible
            .into_iter()
            .map(|i| {
                let rate = self.stat(&self.order[i]).success_rate();
                (i, weight(rate, vocabulary_size))
            })
            .collect()
    }
}

/// 0% success -> `vocabulary_size`, 100% success -> 1.
fn weight(success_rate: f64, vocabulary_size: usize) -> u64 {
    let n = vocabulary_size as f64;
    ((1.0 - n) * success_rate + n).round().max(1.0) as u64
}
