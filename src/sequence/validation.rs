//! Input validation for DNA sequences

use bio_seq::prelude::*;

/// The four DNA bases, in the order reports list them.
pub const DNA_BASES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Trim surrounding whitespace and uppercase a raw sequence.
pub fn normalize_sequence(sequence: &str) -> String {
    sequence.trim().to_uppercase()
}

pub fn is_dna_base(base: char) -> bool {
    DNA_BASES.contains(&base)
}

/// Check that a sequence is non-empty and made only of A, T, C and G.
///
/// Case is ignored and surrounding whitespace is stripped first.
pub fn is_valid_dna(sequence: &str) -> bool {
    let normalized = normalize_sequence(sequence);
    if normalized.is_empty() {
        return false;
    }

    normalized.chars().all(is_dna_base) && normalized.parse::<Seq<Dna>>().is_ok()
}
