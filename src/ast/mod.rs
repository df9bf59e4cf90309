//! Abstract Syntax Tree (AST) definitions for PHP expressions.
//!
//! Nodes are built once, fully populated, and owned by their parent. They carry
//! no source positions, so two trees compare equal whenever they describe the
//! same expression regardless of layout in the source.

mod display;
mod expressions;
mod operators;

use serde::{Deserialize, Serialize};

pub use expressions::*;
pub use operators::*;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
