use std::fmt;

use log::trace;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::sequence::validation::DNA_BASES;

/// One substituted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRecord {
    pub position: usize,
    pub original: char,
    pub mutated: char,
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}: {} -> {}", self.position, self.original, self.mutated)
    }
}

/// Mutated sequence plus the change log that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub sequence: String,
    pub mutations: Vec<MutationRecord>,
}

impl MutationOutcome {
    /// Share of positions that were mutated, in percent.
    pub fn actual_percentage(&self) -> f64 {
        let length = self.sequence.chars().count();
        if length == 0 {
            return 0.0;
        }
        self.mutations.len() as f64 / length as f64 * 100.0
    }
}

/// Pick a base other than `original`, uniformly among the remaining ones.
pub fn substitute_base<R: Rng + ?Sized>(original: char, rng: &mut R) -> char {
    let candidates: Vec<char> = DNA_BASES.iter().copied().filter(|&b| b != original).collect();
    candidates.choose(rng).copied().unwrap_or(original)
}

/// Mutate `floor(percentage / 100 * length)` distinct positions.
///
/// Positions are drawn without replacement and logged in draw order.
/// Percentages at or above 100 mutate every position once; zero, negative
/// or non-finite percentages leave the sequence untouched.
pub fn mutate_by_percentage<R: Rng + ?Sized>(
    sequence: &str,
    percentage: f64,
    rng: &mut R,
) -> MutationOutcome {
    let mut bases: Vec<char> = sequence.chars().collect();
    let total = bases.len();

    // `as usize` saturates negatives and NaN to 0
    let requested = (percentage / 100.0 * total as f64).floor() as usize;
    let amount = requested.min(total);
    trace!("Mutating {amount} of {total} positions ({percentage}%)");

    let mut mutations = Vec::with_capacity(amount);
    for position in index::sample(rng, total, amount).into_iter() {
        let original = bases[position];
        let mutated = substitute_base(original, rng);
        bases[position] = mutated;
        mutations.push(MutationRecord {
            position,
            original,
            mutated,
        });
    }

    MutationOutcome {
        sequence: bases.into_iter().collect(),
        mutations,
    }
}

/// Visit each position in order and mutate it with the given probability.
pub fn mutate_by_probability<R: Rng + ?Sized>(
    sequence: &str,
    probability: f64,
    rng: &mut R,
) -> MutationOutcome {
    let mut mutated_sequence = String::with_capacity(sequence.len());
    let mut mutations = Vec::new();

    for (position, original) in sequence.chars().enumerate() {
        if rng.gen::<f64>() < probability {
            let mutated = substitute_base(original, rng);
            mutated_sequence.push(mutated);
            mutations.push(MutationRecord {
                position,
                original,
                mutated,
            });
        } else {
            mutated_sequence.push(original);
        }
    }

    trace!(
        "Probability mutation at {probability}: {} of {} positions changed",
        mutations.len(),
        mutated_sequence.len()
    );

    MutationOutcome {
        sequence: mutated_sequence,
        mutations,
    }
}
