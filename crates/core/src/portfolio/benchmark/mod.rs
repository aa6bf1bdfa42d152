//! Benchmark module - what-if re-investment simulation.

mod benchmark_calculator;
mod benchmark_model;

pub use benchmark_calculator::*;
pub use benchmark_model::*;
