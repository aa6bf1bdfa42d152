//! Portfolio module - reconstruction, valuation, gain, income, benchmark
//! and aggregation.

pub mod allocation;
pub mod benchmark;
pub mod holdings;
pub mod income;
pub mod performance;
pub mod valuation;

mod portfolio_model;
mod portfolio_service;

pub use allocation::*;
pub use benchmark::*;
pub use holdings::*;
pub use income::*;
pub use performance::*;
pub use portfolio_model::*;
pub use portfolio_service::*;
pub use valuation::*;
