//! Point-mutation simulation over validated DNA sequences

pub mod simulator;

pub use simulator::*;

/// Probability used when the caller gives no usable value.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;
