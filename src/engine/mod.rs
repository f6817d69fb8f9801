//! # Engine
//!
//! The orchestration layer: run configuration, the generation loop, the
//! progress seam, and the history and result structures the loop produces.

pub mod config;
pub mod history;
pub mod progress;
pub mod result;
pub mod runner;

pub use config::{RunConfig, RunConfigBuilder};
pub use history::{GenerationSnapshot, RunHistory};
pub use progress::{ProgressSignal, ProgressSink};
pub use result::RunResult;
pub use runner::GeneticEngine;
