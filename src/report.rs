// File: src/report.rs
use crate::core::stats::WordStat;
use crate::core::types::WordId;
use std::cmp::Ordering;
use std::collections::HashMap;

const HEADERS: [&str; 3] = ["From", "Success Rate", "Total"];
const COLUMN_GAP: usize = 2;

/// Stored records from the best known word to the worst.
///
/// Ties on success rate put the more practised word first, then sort by word.
pub fn sorted_stats(stats: &HashMap<WordId, WordStat>) -> Vec<(&WordId, WordStat)> {
    let mut rows: Vec<(&WordId, WordStat)> = stats.iter().map(|(id, stat)| (id, *stat)).collect();
    rows.sort_by(|(a_id, a), (b_id, b)| {
        b.success_rate()
            .partial_cmp(&a.success_rate())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.total().cmp(&a.total()))
            .then_with(|| a_id.word.cmp(&b_id.word))
    });
    rows
}

/// Renders the stats table; empty when nothing has been recorded.
pub fn render_stats(stats: &HashMap<WordId, WordStat>) -> String {
    let rows: Vec<[String; 3]> = sorted_stats(stats)
        .into_iter()
        .map(|(id, stat)| {
            [
                id.word.clone(),
                format!("{:.0}%", stat.success_rate() * 100.0),
                stat.total().to_string(),
            ]
        })
        .collect();
    if rows.is_empty() {
        return String::new();
    }

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(str::to_string);
    for row in std::iter::once(&header).chain(&rows) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] - cell.chars().count() + COLUMN_GAP;
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> HashMap<WordId, WordStat> {
        [
            (WordId::new("gato", true), WordStat::new(1, 1)),
            (WordId::new("perro", true), WordStat::new(4, 0)),
            (WordId::new("casa", true), WordStat::new(2, 2)),
            (WordId::new("agua", true), WordStat::new(1, 1)),
            (WordId::new("sol", true), WordStat::new(0, 3)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn sorted_by_rate_then_total_then_word() {
        let stats = stats();
        let order: Vec<&str> = sorted_stats(&stats)
            .into_iter()
            .map(|(id, _)| id.word.as_str())
            .collect();
        assert_eq!(order, vec!["perro", "casa", "agua", "gato", "sol"]);
    }

    #[test]
    fn table_is_aligned() {
        let table = render_stats(&stats());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "From   Success Rate  Total");
        assert_eq!(lines[1], "perro  100%          4");
        assert_eq!(lines[5], "sol    0%            3");
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(render_stats(&HashMap::new()), "");
    }
}
