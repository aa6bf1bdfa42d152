//! Run configuration for a portfolio computation.

mod settings_model;

pub use settings_model::*;
