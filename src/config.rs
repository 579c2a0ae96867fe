// File: src/config.rs
use crate::core::vocabulary::WORD_MEMORY_SIZE;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";

/// Session settings, from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "vocabulario")]
#[command(about = "Vocabulary drill that asks the words you miss most often")]
#[command(after_help = "Log filtering is read from VOCABULARIO_LOG.")]
pub struct DrillConfig {
    /// Directory containing lesson CSV files
    #[arg(long = "dir", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Specific lesson file to load (loads all lessons if not given)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Only load the lesson with this name from --dir
    #[arg(long, conflicts_with = "file")]
    pub lesson: Option<String>,

    /// Display statistics sorted by success rate (highest first)
    #[arg(long = "stats")]
    pub show_stats: bool,

    /// Number of recent words never repeated
    #[arg(long = "memory", default_value_t = WORD_MEMORY_SIZE)]
    pub memory_capacity: usize,

    /// Seed the word sampler for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Require accents to match when checking answers
    #[arg(long)]
    pub strict_accents: bool,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file: None,
            lesson: None,
            show_stats: false,
            memory_capacity: WORD_MEMORY_SIZE,
            seed: None,
            strict_accents: false,
        }
    }
}

impl DrillConfig {
    /// Where `stats.json` lives: next to the lesson file, or in the lesson directory.
    pub fn stats_dir(&self) -> &Path {
        match &self.file {
            Some(file) => file.parent().unwrap_or_else(|| Path::new(".")),
            None => &self.data_dir,
        }
    }
}
