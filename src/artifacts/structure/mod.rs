//! Structural parsing
//!
//! Groups normalized lines into a forest of blocks:
//!
//! - `block`: Section and Group nodes with index-range membership
//! - `forest`: The per-document arena with innermost-block lookup
//! - `parser`: Indentation nesting and leading-word grouping heuristics

pub mod block;
pub mod forest;
pub mod parser;
