// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod logging;
pub mod persistence;
pub mod report;

pub use crate::config::DrillConfig;
pub use crate::core::engine::DrillEngine;
pub use crate::core::memory::RecencyMemory;
pub use crate::core::stats::WordStat;
pub use crate::core::types::{Word, WordId};
pub use crate::core::vocabulary::Vocabulary;
pub use crate::error::{DrillError, Result};
