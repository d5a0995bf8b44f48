//! Line normalization
//!
//! Splits configuration text into lines, strips trailing whitespace and drops
//! comment (`!`) and blank lines so that only semantic lines are compared.

pub mod document;
pub mod line;
