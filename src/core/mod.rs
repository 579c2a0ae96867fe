// File: src/core/mod.rs
pub mod engine;
pub mod matcher;
pub mod memory;
pub mod stats;
pub mod types;
pub mod vocabulary;
