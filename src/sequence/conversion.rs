//! Base conversion functions for DNA/RNA sequences

/// Convert a DNA base to its complementary base
pub fn get_complementary_base(base: char) -> char {
    match base.to_uppercase().next().unwrap_or(' ') {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        _ => '?',
    }
}

/// Convert a DNA base to the base an RNA transcript carries at that position
pub fn dna_to_rna(base: char) -> char {
    match base.to_uppercase().next().unwrap_or(base) {
        'T' => 'U',
        other => other,
    }
}

/// Build the complementary strand. Characters outside A/T/C/G become `?`.
pub fn complement(sequence: &str) -> String {
    sequence.chars().map(get_complementary_base).collect()
}

/// Complementary strand read in reverse order.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(get_complementary_base).collect()
}

/// Transcribe DNA to RNA by replacing every `T` with `U`.
///
/// Other characters are uppercased and passed through unchanged.
pub fn transcribe_to_rna(sequence: &str) -> String {
    sequence.chars().map(dna_to_rna).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        assert_eq!(complement("ATCG"), "TAGC");
        assert_eq!(complement("atcg"), "TAGC");
        assert_eq!(complement(""), "");
    }

    #[test]
    fn test_complement_placeholder() {
        assert_eq!(complement("AXG"), "T?C");
        assert_eq!(complement("A-N"), "T??");
    }

    #[test]
    fn test_complement_is_self_inverse() {
        let seq = "GATTACACCGGT";
        assert_eq!(complement(&complement(seq)), seq);
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("AAAC"), "GTTT");
        assert_eq!(reverse_complement("GAATTC"), "GAATTC");
    }

    #[test]
    fn test_transcribe_to_rna() {
        assert_eq!(transcribe_to_rna("ATCG"), "AUCG");
        assert_eq!(transcribe_to_rna("ttaa"), "UUAA");
        assert_eq!(transcribe_to_rna("ATXG"), "AUXG");
    }
}
