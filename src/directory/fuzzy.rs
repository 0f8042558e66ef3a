//! Approximate country name search.
//!
//! Ranking runs in three tiers and stops at the first tier that yields
//! anything:
//!
//! 1. an exact (case- and accent-insensitive) match on a code or name returns
//!    that record alone;
//! 2. substring matches in a name score higher the earlier the query appears;
//! 3. names, or words within names, a small edit distance away from the query
//!    catch typos such as "Franse".
//!
//! Results are ordered by descending score with ties broken by alpha-2 code so
//! output stays deterministic.

use crate::directory::model::CountryRecord;
use std::collections::BTreeMap;

// Words shorter than this are never typo candidates; "Peru" vs "Perm" is too
// close to call.
const MIN_TYPO_WORD_CHARS: usize = 4;

/// Lowercase, trim, and strip common Latin diacritics.
pub(crate) fn fold_key(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
        .collect()
}

fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' | 'ș' => 's',
        'ť' | 'ţ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Rank `records` against `query`, returning indexes best match first.
pub(crate) fn rank(records: &[CountryRecord], query: &str) -> Vec<usize> {
    let needle = fold_key(query);
    if needle.is_empty() {
        return Vec::new();
    }

    if let Some(idx) = records.iter().position(|r| is_exact_match(r, &needle)) {
        return vec![idx];
    }

    let mut scores = substring_scores(records, &needle);
    if scores.is_empty() {
        scores = typo_scores(records, &needle);
    }

    let mut ranked: Vec<(usize, usize)> = scores.into_iter().collect();
    ranked.sort_by(|(a_idx, a_score), (b_idx, b_score)| {
        b_score
            .cmp(a_score)
            .then_with(|| records[*a_idx].alpha_2.cmp(&records[*b_idx].alpha_2))
    });
    ranked.into_iter().map(|(idx, _)| idx).collect()
}

fn is_exact_match(record: &CountryRecord, needle: &str) -> bool {
    record.alpha_2.eq_ignore_ascii_case(needle)
        || record.alpha_3.eq_ignore_ascii_case(needle)
        || record.numeric == needle
        || record.names().any(|name| fold_key(name) == needle)
}

fn substring_scores(records: &[CountryRecord], needle: &str) -> BTreeMap<usize, usize> {
    let mut scores = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        for name in record.names() {
            let folded = fold_key(name);
            if let Some(offset) = folded.find(needle) {
                let position = folded[..offset].chars().count();
                // Earlier matches rank higher; "new" deep inside a long name
                // still gets a floor score.
                let score = 30usize.saturating_sub(2 * position).max(5);
                scores.insert(idx, score);
                break;
            }
        }
    }
    scores
}

fn typo_scores(records: &[CountryRecord], needle: &str) -> BTreeMap<usize, usize> {
    let budget = typo_budget(needle.chars().count());
    let mut scores = BTreeMap::new();
    if budget == 0 {
        return scores;
    }

    for (idx, record) in records.iter().enumerate() {
        let best = record
            .names()
            .flat_map(typo_candidates)
            .map(|candidate| levenshtein(needle, &candidate))
            .min();
        if let Some(distance) = best.filter(|d| *d <= budget) {
            scores.insert(idx, budget + 1 - distance);
        }
    }
    scores
}

fn typo_budget(query_chars: usize) -> usize {
    match query_chars {
        0..MIN_TYPO_WORD_CHARS => 0,
        MIN_TYPO_WORD_CHARS..=7 => 1,
        _ => 2,
    }
}

/// The whole folded name plus each sufficiently long word in it.
fn typo_candidates(name: &str) -> Vec<String> {
    let folded = fold_key(name);
    let mut candidates: Vec<String> = folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_TYPO_WORD_CHARS)
        .map(str::to_string)
        .collect();
    candidates.push(folded);
    candidates
}

/// Levenshtein edit distance over chars.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alpha_2: &str, alpha_3: &str, numeric: &str, name: &str) -> CountryRecord {
        CountryRecord {
            alpha_2: alpha_2.to_string(),
            alpha_3: alpha_3.to_string(),
            numeric: numeric.to_string(),
            name: name.to_string(),
            common_name: None,
            official_name: None,
        }
    }

    fn sample() -> Vec<CountryRecord> {
        vec![
            record("FR", "FRA", "250", "France"),
            record("NC", "NCL", "540", "New Caledonia"),
            record("NZ", "NZL", "554", "New Zealand"),
            record("PG", "PNG", "598", "Papua New Guinea"),
            record("CI", "CIV", "384", "Côte d'Ivoire"),
        ]
    }

    #[test]
    fn fold_key_strips_case_and_accents() {
        assert_eq!(fold_key("  Côte d'Ivoire "), "cote d'ivoire");
        assert_eq!(fold_key("RÉUNION"), "reunion");
    }

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "ab"), 2);
        assert_eq!(levenshtein("franse", "france"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("é", "e"), 1);
    }

    #[test]
    fn exact_match_short_circuits() {
        let records = sample();
        assert_eq!(rank(&records, "cote d'ivoire"), vec![4]);
        assert_eq!(rank(&records, "nzl"), vec![2]);
    }

    #[test]
    fn substring_prefers_early_matches() {
        let records = sample();
        // "new" starts Caledonia and Zealand, sits mid-name in Papua New Guinea.
        assert_eq!(rank(&records, "new"), vec![1, 2, 3]);
    }

    #[test]
    fn typo_tolerance_finds_misspellings() {
        let records = sample();
        assert_eq!(rank(&records, "Franse"), vec![0]);
        assert_eq!(rank(&records, "zeeland"), vec![2]);
    }

    #[test]
    fn typo_budget_grows_with_query_length() {
        assert_eq!(typo_budget(MIN_TYPO_WORD_CHARS - 1), 0);
        assert_eq!(typo_budget(MIN_TYPO_WORD_CHARS), 1);
        assert_eq!(typo_budget(7), 1);
        assert_eq!(typo_budget(8), 2);
    }

    #[test]
    fn short_or_empty_queries_do_not_guess() {
        let records = sample();
        assert!(rank(&records, "   ").is_empty());
        assert!(rank(&records, "xq").is_empty());
        assert!(rank(&records, "qqqqqqqq").is_empty());
    }
}
