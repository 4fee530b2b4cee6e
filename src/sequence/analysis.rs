use std::fmt;

use crate::sequence::validation::DNA_BASES;

/// Round to two decimal places, exact ties going to the even digit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn count_bases(sequence: &str, bases: &[char]) -> usize {
    sequence
        .chars()
        .filter(|c| bases.contains(&c.to_ascii_uppercase()))
        .count()
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

pub fn gc_content(sequence: &str) -> f64 {
    percentage_of(count_bases(sequence, &['G', 'C']), sequence.chars().count())
}

pub fn at_content(sequence: &str) -> f64 {
    percentage_of(count_bases(sequence, &['A', 'T']), sequence.chars().count())
}

/// AT/GC ratio, or `Undefined` when the sequence carries no G or C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtGcRatio {
    Ratio(f64),
    Undefined,
}

impl AtGcRatio {
    pub fn value(&self) -> Option<f64> {
        match self {
            AtGcRatio::Ratio(ratio) => Some(*ratio),
            AtGcRatio::Undefined => None,
        }
    }
}

impl fmt::Display for AtGcRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtGcRatio::Ratio(ratio) => write!(f, "{ratio}"),
            AtGcRatio::Undefined => write!(f, "Undefined (No GC bases)"),
        }
    }
}

pub fn at_gc_ratio(sequence: &str) -> AtGcRatio {
    let at_count = count_bases(sequence, &['A', 'T']);
    let gc_count = count_bases(sequence, &['G', 'C']);

    if gc_count == 0 {
        return AtGcRatio::Undefined;
    }

    AtGcRatio::Ratio(round2(at_count as f64 / gc_count as f64))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseCount {
    pub base: char,
    pub count: usize,
    /// Share of the whole sequence, in percent, rounded to 2 decimals.
    pub percentage: f64,
}

/// Count and percentage for each of A, T, C, G, in that order.
pub fn base_composition(sequence: &str) -> Vec<BaseCount> {
    let total = sequence.chars().count();

    DNA_BASES
        .iter()
        .map(|&base| {
            let count = count_bases(sequence, &[base]);
            BaseCount {
                base,
                count,
                percentage: percentage_of(count, total),
            }
        })
        .collect()
}
