//! The discovered-pattern record shared by the candidate generator, template
//! compiler, and selector.

use crate::scoring::ContentEntry;

/// Which family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Number,
    Prefix,
}

/// A canonical dedup identifier for a pattern: which parser (if any) it came
/// from, plus the literal prefix/suffix text around the variable part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    pub parser: Option<&'static str>,
    pub prefix: String,
    pub suffix: String,
}

/// A discovered heading family, with its visible template and the matches it
/// was born from (used to seed its initial beauty before re-scanning).
#[derive(Debug, Clone)]
pub struct Pattern {
    pub kind: PatternKind,
    pub template: String,
    pub key: PatternKey,
    pub priority: u32,
    pub beauty: f64,
    /// For `Number` patterns, the originating parser's name.
    pub parser_name: Option<&'static str>,
    /// For `Prefix` patterns, the uniqueness sub-score the pattern was born
    /// with (used as `B_num`'s stand-in during final re-scoring).
    pub prefix_uniqueness: Option<f64>,
    pub contents: Vec<ContentEntry>,
}
