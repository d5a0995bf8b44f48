//! Configuration data structures and algorithms
//!
//! This module contains the comparison pipeline and its helpers:
//!
//! - `normalize`: Comment and whitespace stripping
//! - `structure`: Section and group parsing
//! - `diff`: Myers' diff and structural context expansion
//! - `report`: Rendering of the diff report
//! - `banner`: Device naming and the report banner
//! - `core`: Shared utilities (pager wrapper)

pub mod banner;
pub mod core;
pub mod diff;
pub mod normalize;
pub mod report;
pub mod structure;
