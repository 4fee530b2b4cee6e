//! Aggregate statistics report for a single sequence

use std::fmt;

use crate::sequence::analysis::{at_gc_ratio, base_composition, gc_content, AtGcRatio, BaseCount};

const GC_RICH_THRESHOLD: f64 = 60.0;
const AT_RICH_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    GcRich,
    AtRich,
    Balanced,
}

impl Classification {
    /// Classify by GC content. 40 and 60 themselves count as balanced.
    pub fn from_gc_content(gc_content: f64) -> Self {
        if gc_content > GC_RICH_THRESHOLD {
            Classification::GcRich
        } else if gc_content < AT_RICH_THRESHOLD {
            Classification::AtRich
        } else {
            Classification::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::GcRich => "GC-Rich",
            Classification::AtRich => "AT-Rich",
            Classification::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStatistics {
    pub length: usize,
    pub gc_content: f64,
    pub at_gc_ratio: AtGcRatio,
    pub base_composition: Vec<BaseCount>,
    pub classification: Classification,
}

pub fn sequence_statistics(sequence: &str) -> SequenceStatistics {
    let gc_content = gc_content(sequence);

    SequenceStatistics {
        length: sequence.chars().count(),
        gc_content,
        at_gc_ratio: at_gc_ratio(sequence),
        base_composition: base_composition(sequence),
        classification: Classification::from_gc_content(gc_content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_of_examples() {
        assert_eq!(sequence_statistics("GGGGCCCC").classification, Classification::GcRich);
        assert_eq!(sequence_statistics("AAAATTTT").classification, Classification::AtRich);
        assert_eq!(sequence_statistics("ATCGATCG").classification, Classification::Balanced);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(Classification::from_gc_content(60.0), Classification::Balanced);
        assert_eq!(Classification::from_gc_content(40.0), Classification::Balanced);
        assert_eq!(Classification::from_gc_content(60.01), Classification::GcRich);
        assert_eq!(Classification::from_gc_content(39.99), Classification::AtRich);
    }

    #[test]
    fn test_statistics_fields() {
        let stats = sequence_statistics("AATTGC");
        assert_eq!(stats.length, 6);
        assert_eq!(stats.gc_content, 33.33);
        assert_eq!(stats.at_gc_ratio, AtGcRatio::Ratio(2.0));
        assert_eq!(stats.base_composition.len(), 4);
        assert_eq!(stats.classification.to_string(), "AT-Rich");
    }

    #[test]
    fn test_statistics_without_gc() {
        let stats = sequence_statistics("ATAT");
        assert_eq!(stats.gc_content, 0.0);
        assert_eq!(stats.at_gc_ratio, AtGcRatio::Undefined);
        assert_eq!(stats.classification, Classification::AtRich);
    }
}
