//! Command implementations for the ranking loader CLI

pub mod load_rankings;
pub mod year_compare;
