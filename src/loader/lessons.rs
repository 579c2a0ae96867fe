// File: src/loader/lessons.rs
use crate::error::{DrillError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LESSON_EXTENSION: &str = "csv";

/// One lesson line split on `;`: a new-language word followed by its translations.
pub type Row = Vec<String>;

/// Loads every lesson file directly inside `dir`, in file name order.
///
/// With `lesson` set, only the file whose stem matches it is read.
pub fn load_lessons(dir: &Path, lesson: Option<&str>) -> Result<Vec<Row>> {
    let entries = fs::read_dir(dir).map_err(|e| DrillError::io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DrillError::io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(LESSON_EXTENSION) {
            continue;
        }
        if let Some(name) = lesson {
            if path.file_stem().and_then(|s| s.to_str()) != Some(name) {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();

    let mut rows = Vec::new();
    for path in &paths {
        rows.extend(load_lesson(path)?);
    }
    debug!(dir = %dir.display(), files = paths.len(), rows = rows.len(), "lessons loaded");
    Ok(rows)
}

/// Reads one lesson file; blank lines are skipped.
pub fn load_lesson(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|e| DrillError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| DrillError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(line.split(';').map(str::to_string).collect());
    }
    Ok(rows)
}
