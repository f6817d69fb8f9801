pub mod chromosome;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod objective;
pub mod operators;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use engine::{GeneticEngine, RunConfig, RunResult};
pub use error::{GeneticError, OptionExt, Result};
