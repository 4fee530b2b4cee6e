//! Pattern search and reverse-complement palindrome detection

use crate::sequence::conversion::reverse_complement;

/// Palindromes are searched with window lengths strictly below this bound.
pub const PALINDROME_WINDOW_LIMIT: usize = 12;

pub const DEFAULT_PALINDROME_MIN_LENGTH: usize = 4;

/// Every 0-based start index where `pattern` occurs, case-insensitively.
///
/// Matches may overlap: after a hit at `p` the scan resumes at `p + 1`.
/// An empty pattern, or one longer than the sequence, finds nothing.
pub fn find_pattern_occurrences(sequence: &str, pattern: &str) -> Vec<usize> {
    let sequence: Vec<char> = sequence.to_uppercase().chars().collect();
    let pattern: Vec<char> = pattern.to_uppercase().chars().collect();

    if pattern.is_empty() || pattern.len() > sequence.len() {
        return Vec::new();
    }

    sequence
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(position, _)| position)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palindrome {
    pub sequence: String,
    pub position: usize,
    pub length: usize,
}

/// Find every substring equal to its own reverse complement.
///
/// Results are ordered by length, then by position. Nested and
/// overlapping hits are all reported.
pub fn find_palindromes(sequence: &str, min_length: usize) -> Vec<Palindrome> {
    let sequence: Vec<char> = sequence.to_uppercase().chars().collect();
    let max_exclusive = PALINDROME_WINDOW_LIMIT.min(sequence.len() + 1);
    let mut palindromes = Vec::new();

    for length in min_length.max(1)..max_exclusive {
        for (position, window) in sequence.windows(length).enumerate() {
            let substring: String = window.iter().collect();
            if substring == reverse_complement(&substring) {
                palindromes.push(Palindrome {
                    sequence: substring,
                    position,
                    length,
                });
            }
        }
    }

    palindromes
}
