// File: src/loader/mod.rs
pub mod lessons;
pub mod vocabulary;

pub use lessons::{load_lesson, load_lessons, Row};
pub use vocabulary::{load_vocabulary_from_dir, load_vocabulary_from_file, to_words};
