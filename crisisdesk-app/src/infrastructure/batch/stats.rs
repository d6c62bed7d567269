use crate::domain::{BatchStats, RowAnalysis};
use std::collections::{HashMap, HashSet};

const MIN_WORD_LEN: usize = 3;
const MAX_WORDS: usize = 100;

/// Default stop-word list for the word-frequency sheet. Callers may extend or
/// replace it.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "was", "were", "this", "that", "with", "have",
    "has", "had", "not", "you", "your", "our", "but", "they", "them", "their",
    "its", "it's", "i'm", "will", "would", "can", "could", "should", "very",
    "just", "all", "too", "get", "got", "been", "being", "what", "when", "why",
    "how", "who", "which", "there", "here", "from", "about", "into", "out",
    "then", "than", "now", "still", "also", "because", "don't", "can't",
    "didn't", "won't", "never", "ever", "even",
];

pub fn default_stop_words() -> HashSet<&'static str> {
    DEFAULT_STOP_WORDS.iter().copied().collect()
}

/// Aggregate counts over a finished batch. Error rows are tallied separately
/// and excluded from the level/category breakdowns and the anger average.
pub fn compute_stats(rows: &[RowAnalysis]) -> BatchStats {
    let mut risk_counts: HashMap<&str, u32> = HashMap::new();
    let mut category_counts: HashMap<&str, u32> = HashMap::new();
    let mut anger_sum = 0u32;
    let mut anger_n = 0u32;
    let mut error_rows = 0;

    for row in rows {
        if row.error {
            error_rows += 1;
            continue;
        }
        *risk_counts.entry(row.risk_level.as_str()).or_insert(0) += 1;
        *category_counts.entry(row.category.as_str()).or_insert(0) += 1;
        if let Some(score) = row.anger_score {
            anger_sum += u32::from(score);
            anger_n += 1;
        }
    }

    BatchStats {
        total_rows: rows.len(),
        error_rows,
        risk_level_counts: sorted_counts(risk_counts),
        category_counts: sorted_counts(category_counts),
        average_anger_score: if anger_n > 0 {
            Some(f64::from(anger_sum) / f64::from(anger_n))
        } else {
            None
        },
    }
}

/// Case-insensitive word counts over the complaint texts, stop-words and
/// short tokens removed, top `MAX_WORDS` kept.
pub fn word_frequency<'a, I>(texts: I, stop_words: &HashSet<&str>) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();

    for text in texts {
        for token in text.to_lowercase().split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if word.chars().count() < MIN_WORD_LEN || stop_words.contains(word) {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    sorted_counts_owned(counts)
}

fn sorted_counts(counts: HashMap<&str, u32>) -> Vec<(String, u32)> {
    sorted_counts_owned(
        counts
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

fn sorted_counts_owned(counts: HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(MAX_WORDS);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(risk: &str, category: &str, anger: Option<u8>, error: bool) -> RowAnalysis {
        RowAnalysis {
            row_index: 0,
            message: String::new(),
            anger_score: anger,
            risk_level: risk.to_string(),
            category: category.to_string(),
            suggested_reply: String::new(),
            error,
        }
    }

    #[test]
    fn stats_split_errors_from_verdicts() {
        let rows = vec![
            row("High", "Delivery", Some(8), false),
            row("High", "Delivery", Some(6), false),
            row("Low", "Billing", Some(1), false),
            row("Error", "Error", None, true),
        ];
        let stats = compute_stats(&rows);
        assert_eq!(stats.total_rows, 4);
        assert_eq!(stats.error_rows, 1);
        assert_eq!(stats.risk_level_counts[0], ("High".to_string(), 2));
        assert_eq!(stats.category_counts[0], ("Delivery".to_string(), 2));
        assert_eq!(stats.average_anger_score, Some(5.0));
    }

    #[test]
    fn stats_on_all_error_rows() {
        let rows = vec![row("Error", "Error", None, true)];
        let stats = compute_stats(&rows);
        assert_eq!(stats.error_rows, 1);
        assert!(stats.risk_level_counts.is_empty());
        assert_eq!(stats.average_anger_score, None);
    }

    #[test]
    fn word_frequency_is_case_insensitive() {
        let counts = word_frequency(
            ["Refund REFUND refund", "please refund"],
            &default_stop_words(),
        );
        assert_eq!(counts[0], ("refund".to_string(), 4));
    }

    #[test]
    fn word_frequency_excludes_stop_words_and_short_tokens() {
        let counts = word_frequency(
            ["the order was cold and the driver is ok"],
            &default_stop_words(),
        );
        let words: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();
        assert!(words.contains(&"order"));
        assert!(words.contains(&"cold"));
        assert!(words.contains(&"driver"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"and"));
        assert!(!words.contains(&"was"));
        assert!(!words.contains(&"is")); // under the length floor
        assert!(!words.contains(&"ok"));
    }

    #[test]
    fn word_frequency_trims_punctuation() {
        let counts = word_frequency(["cold! cold, (cold)"], &default_stop_words());
        assert_eq!(counts[0], ("cold".to_string(), 3));
    }
}
