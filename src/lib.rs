//! DnaZap - interactive DNA sequence explorer
//!
//! This library provides validation, complementary strand and RNA
//! transcription, composition analysis, pattern and palindrome search,
//! and a point-mutation simulator for short DNA sequences.

pub mod app;
pub mod config;
pub mod logging;
pub mod mutation;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Config;
