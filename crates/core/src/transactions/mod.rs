//! Transaction history module - domain models and per-day aggregation.

mod transactions_model;

pub use transactions_model::*;
