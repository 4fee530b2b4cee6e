pub mod analysis;
pub mod conversion;
pub mod pattern;
pub mod statistics;
pub mod validation;

pub use analysis::*;
pub use conversion::*;
pub use pattern::*;
pub use statistics::*;
pub use validation::*;
