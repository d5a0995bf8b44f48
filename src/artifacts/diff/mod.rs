//! Context-aware diffing
//!
//! This module compares two normalized documents and expands every change to
//! the structure it belongs to:
//!
//! - `myers`: Myers' diff producing an index-based edit script
//! - `edit_script`: Edit scripts, change regions and equal-cost run sliding
//! - `change_region`: Added/removed runs of lines on one side
//! - `context_window`: Block-aligned context around changes and its merging
//! - `context_diff`: The full pipeline from documents to a rendered report

pub mod change_region;
pub mod context_diff;
pub mod context_window;
pub mod edit_script;
pub mod myers;

use crate::artifacts::diff::change_region::Side;
use crate::artifacts::diff::context_diff::ContextDiff;
use crate::artifacts::normalize::document::NormalizedDocument;
use crate::artifacts::report::Report;
use crate::artifacts::structure::parser::ParseOptions;
use crate::errors::Result;

/// Compare two configuration texts
///
/// Returns an empty report when the texts differ only in comments, blank
/// lines or trailing whitespace.
pub fn diff(left: &str, right: &str, options: &ParseOptions) -> Report {
    let left = NormalizedDocument::from_text(left);
    let right = NormalizedDocument::from_text(right);

    ContextDiff::new(&left, &right, options).report()
}

/// Compare two raw file contents, rejecting input that is not UTF-8
pub fn diff_bytes(left: &[u8], right: &[u8], options: &ParseOptions) -> Result<Report> {
    let left = NormalizedDocument::from_bytes(left, Side::Left)?;
    let right = NormalizedDocument::from_bytes(right, Side::Right)?;

    Ok(ContextDiff::new(&left, &right, options).report())
}
