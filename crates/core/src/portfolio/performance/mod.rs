//! Performance module - money-weighted gain calculation.

mod gain_calculator;
mod performance_model;

pub use gain_calculator::*;
pub use performance_model::*;
