//! Foliotrack Core - Portfolio reconstruction and comparison engine.
//!
//! This crate contains the pure computation core for Foliotrack: daily
//! held-quantity reconstruction, valuation, money-weighted gain, dividend
//! attribution, benchmark simulation and portfolio aggregation. It performs
//! no I/O; market data and transaction history are supplied by the caller
//! as immutable snapshots.

pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod settings;
pub mod transactions;
pub mod utils;

// Re-export common types from the input and portfolio modules
pub use market_data::*;
pub use portfolio::*;
pub use settings::*;
pub use transactions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
