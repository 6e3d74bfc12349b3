//! Errors raised by the sinks in [`sink`](crate::sink).
//!
//! Formatting itself never fails: every error here comes from a sink refusing a write, and reaches
//! the caller unchanged through every level of nested formatting.

use std::fmt;
use thiserror::Error;

/// A [`Span`](crate::sink::Span) had too little room left for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("span overflow: {requested} more bytes requested after {written} of {capacity} were used")]
pub struct Overflow {
    /// The total capacity of the span, in bytes.
    pub capacity: usize,
    /// How many bytes had been written before the rejected write.
    pub written: usize,
    /// The size of the rejected write, in bytes.
    pub requested: usize,
}

impl Overflow {
    /// How many bytes were still free when the write was rejected.
    pub fn remaining(&self) -> usize {
        self.capacity - self.written
    }
}

/// The error returned by writes to a [`Span`](crate::sink::Span).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// The span is full.
    #[error(transparent)]
    Overflow(#[from] Overflow),
    /// A [`Display`](fmt::Display) implementation reported an error of its own.
    #[error("a Display implementation returned an error")]
    Display(#[from] fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_reports_sizes() {
        let overflow = Overflow {
            capacity: 8,
            written: 6,
            requested: 3,
        };
        assert_eq!(overflow.remaining(), 2);
        assert_eq!(
            overflow.to_string(),
            "span overflow: 3 more bytes requested after 6 of 8 were used"
        );
        assert_eq!(SpanError::from(overflow).to_string(), overflow.to_string());
    }
}
