//! Error types for the table-of-contents inference engine.
//!
//! The engine distinguishes recoverable conditions (a single candidate
//! pattern fails to compile, or no heading pattern clears the beauty
//! threshold) from internal invariant violations, which are fatal: a scoring
//! factor that isn't finite or non-negative, or a prefix-path subset smaller
//! than the bucket it was drawn from, indicates a bug rather than unusual
//! input.

use thiserror::Error;

/// Errors that can surface while inferring a table of contents.
#[derive(Debug, Error)]
pub enum TocError {
    /// A template's regex body failed to compile. Callers localize this to a
    /// never-match sentinel for that one template and continue; this variant
    /// exists so the failure is still observable (e.g. for logging).
    #[error("template regex failed to compile: {template}: {source}")]
    RegexSyntax {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// A scoring factor evaluated to a non-finite or negative number, or a
    /// prefix-path subset was smaller than the bucket it was drawn from. This
    /// should never happen for well-formed candidates; callers treat it as
    /// fatal rather than silently discarding the candidate.
    #[error("invariant violation: {0}")]
    Invariant(String),
}
