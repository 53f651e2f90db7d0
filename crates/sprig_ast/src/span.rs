//! Source spans for nodes produced by a front end.

use serde::{Deserialize, Serialize};

/// A span representing a range in source text.
///
/// Uses byte offsets (0-indexed). Nodes built by consumers usually carry no
/// span at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    pub start: u32,
    /// End byte offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}
