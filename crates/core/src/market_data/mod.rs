//! Market data module - daily quote and dividend input contracts.

mod market_data_model;

pub use market_data_model::*;
