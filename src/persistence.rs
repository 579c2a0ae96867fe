// File: src/persistence.rs
use crate::core::stats::WordStat;
use crate::core::types::WordId;
use crate::error::{DrillError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const STATS_FILE_NAME: &str = "stats.json";

pub fn encode_word_id(id: &WordId) -> String {
    id.to_string()
}

pub fn decode_word_id(key: &str) -> Result<WordId> {
    if let Some(word) = key.strip_suffix("_from") {
        Ok(WordId::new(word, true))
    } else if let Some(word) = key.strip_suffix("_to") {
        Ok(WordId::new(word, false))
    } else {
        Err(DrillError::InvalidWordId(key.to_string()))
    }
}

/// Reads `stats.json` from `dir`.
///
/// A missing or unreadable file means no prior data. Malformed contents are
/// logged and treated the same way.
pub fn load_stats(dir: &Path) -> HashMap<WordId, WordStat> {
    let path = dir.join(STATS_FILE_NAME);

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no stats loaded");
            return HashMap::new();
        }
    };

    let serialized: HashMap<String, WordStat> = match serde_json::from_str(&data) {
        Ok(serialized) => serialized,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "error unmarshalling stats");
            return HashMap::new();
        }
    };

    serialized
        .into_iter()
        .filter_map(|(key, stat)| match decode_word_id(&key) {
            Ok(id) => Some((id, stat)),
            Err(e) => {
                debug!(error = %e, "skipping stats entry");
                None
            }
        })
        .collect()
}

/// Writes the stats snapshot to `stats.json` in `dir`.
///
/// The snapshot is merged over what is already on disk so that words from
/// other lessons keep their history. Words never answered are left out, and
/// nothing is written if no word has been answered at all.
pub fn save_stats(stats: &HashMap<WordId, WordStat>, dir: &Path) -> Result<()> {
    let path = dir.join(STATS_FILE_NAME);

    let mut all_stats = load_stats(dir);
    all_stats.extend(
        stats
            .iter()
            .filter(|(_, stat)| stat.total() > 0)
            .map(|(id, stat)| (id.clone(), *stat)),
    );

    // BTreeMap keeps the file stable between saves.
    let serialized: BTreeMap<String, WordStat> = all_stats
        .iter()
        .filter(|(_, stat)| stat.total() > 0)
        .map(|(id, stat)| (encode_word_id(id), *stat))
        .collect();

    if serialized.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| DrillError::io(dir, e))?;
    let temp_file = NamedTempFile::new_in(dir).map_err(|e| DrillError::io(dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, &serialized)?;
        writer.flush().map_err(|e| DrillError::io(temp_file.path(), e))?;
    }
    temp_file
        .persist(&path)
        .map_err(|e| DrillError::io(&path, e.error))?;

    debug!(path = %path.display(), entries = serialized.len(), "stats saved");
    Ok(())
}
