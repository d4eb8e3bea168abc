//! Compile-time configuration constants for the table-of-contents inference engine.
//!
//! These values are not overridable through CLI arguments; they are tuned
//! constants that shape the search over candidate heading patterns.

/// Reject any candidate TOC whose content exceeds this many entries.
pub const MAX_CONTENTS_LENGTH: usize = 2000;

/// Minimum number of entries a candidate TOC must have to be considered.
pub const MIN_CONTENTS: usize = 3;

/// Lines longer than this cannot be headings.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Exponent base for the mild bonus given to longer TOCs in `b_size`.
pub const FACTOR_CONTENTS_SIZE: f64 = 4.0;

/// Exponent base for the central-mass coverage/exclusion penalties in `b_size`.
pub const FACTOR_OUTLINER: f64 = 8.0;

/// Exponent base for the lower/upper spread penalties in `b_size`.
pub const FACTOR_VARIANCE_SIZE: f64 = 5.0;

/// Bit shift used to expand the central window outward, and the trailing-gap
/// outlier test in `b_size`.
pub const OUTLINER_DISTANCE: u32 = 3;

/// Exponent base for the invalid-title penalty in `b_title`.
pub const FACTOR_TITLE_INVALID: f64 = 8.0;

/// Number of duplicate titles tolerated before a title is considered invalid.
pub const TOC_DUPLICATE_TOLERATE: usize = 1;

/// Exponent base for the "reaches a high chapter number" bonus in `b_num`.
pub const FACTOR_NUMBER_MAX: f64 = 5.0;

/// Exponent base for the hole-density penalty in `b_num`.
pub const FACTOR_NUMBER_HOLES: f64 = 5.0;

/// Exponent base for the non-monotone-outlier penalty in `b_num`.
pub const FACTOR_NUMBER_INVALID: f64 = 5.0;

/// Extra denominator factor applied to letter-led prefixes in the prefix path.
pub const FACTOR_TEXT_PREFIX: f64 = 3.0;

/// Divisor applied to the keyword-uniqueness exponent in the prefix path.
pub const KEYWORD_UNIQUE_FACTOR: f64 = 4.0;

/// Minimum beauty a candidate pattern must clear during generation.
pub const BEAUTY_MIN_1: f64 = 0.1;

/// Minimum beauty the winning pattern must clear after re-scoring.
pub const BEAUTY_MIN_2: f64 = 0.1;

/// Minimum selectivity (matches / denominator) required along the prefix path.
pub const PREFIX_MIN_RATIO: f64 = 0.45;

/// Number of candidates kept per family (numeric / prefix) before re-scoring.
pub const TEMPLATE_COUNT_1: usize = 10;
