//! One pass over the article: splits it into line records, tracks the byte
//! cursor of each line, a per-token "how many distinct lines mention this"
//! frequency map, and runs every numeral parser over lines short enough to
//! plausibly be a heading.

use crate::numerals::PARSERS;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// A single line of the article, with everything derived from it that the
/// rest of the engine needs without re-scanning the raw text.
#[derive(Debug, Clone)]
pub struct LineRecord {
    /// The raw line, as it appeared in the article (not trimmed).
    pub raw: String,
    /// Byte offset of this line's first character within the article.
    pub cursor: usize,
    /// Tokens of the trimmed line, in source order.
    pub tokens: Vec<String>,
    /// One slot per configured numeral parser (same order as `PARSERS`):
    /// the number that parser found on this line, if any.
    pub numbers: Vec<Option<i64>>,
}

/// One pass's worth of derived state over the whole article.
pub struct ArticleContext {
    /// Total cursor distance consumed walking every line plus its
    /// terminating newline, per the line-walking procedure below.
    pub chars: usize,
    pub lines: Vec<LineRecord>,
    /// For each token, the number of distinct lines on which it appears
    /// (counted once per line, not once per occurrence).
    pub token_counts: HashMap<String, usize>,
}

impl ArticleContext {
    pub fn build(article: &str, max_title_length: usize) -> Self {
        let mut lines = Vec::new();
        let mut token_counts: HashMap<String, usize> = HashMap::new();
        let mut cursor = 0usize;

        for raw_line in article.split('\n') {
            let tokens = tokenize(raw_line);

            let mut seen_on_line: std::collections::HashSet<&str> = std::collections::HashSet::new();
            for tok in &tokens {
                if seen_on_line.insert(tok.as_str()) {
                    *token_counts.entry(tok.clone()).or_insert(0) += 1;
                }
            }

            let numbers = if raw_line.len() < max_title_length {
                PARSERS
                    .iter()
                    .map(|parser| parser.extract(raw_line).map(|m| m.number))
                    .collect()
            } else {
                vec![None; PARSERS.len()]
            };

            lines.push(LineRecord {
                raw: raw_line.to_string(),
                cursor,
                tokens,
                numbers,
            });

            cursor += raw_line.len() + 1;
        }

        ArticleContext {
            chars: cursor,
            lines,
            token_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_TITLE_LENGTH;

    #[test]
    fn cursors_advance_by_line_length_plus_one() {
        let ctx = ArticleContext::build("abc\nde\nf", MAX_TITLE_LENGTH);
        assert_eq!(ctx.lines[0].cursor, 0);
        assert_eq!(ctx.lines[1].cursor, 4);
        assert_eq!(ctx.lines[2].cursor, 7);
        assert_eq!(ctx.chars, 9);
    }

    #[test]
    fn token_counts_are_per_line_unique() {
        let ctx = ArticleContext::build("cat cat dog\ncat bird", MAX_TITLE_LENGTH);
        assert_eq!(ctx.token_counts.get("cat"), Some(&2));
        assert_eq!(ctx.token_counts.get("dog"), Some(&1));
        assert_eq!(ctx.token_counts.get("bird"), Some(&1));
    }

    #[test]
    fn numbers_are_extracted_per_configured_parser() {
        let ctx = ArticleContext::build("Chapter IV", MAX_TITLE_LENGTH);
        let arabic_idx = PARSERS.iter().position(|p| p.name == "arabic").unwrap();
        let roman_idx = PARSERS
            .iter()
            .position(|p| p.name == "roman-ascii-upper")
            .unwrap();
        assert_eq!(ctx.lines[0].numbers[arabic_idx], None);
        assert_eq!(ctx.lines[0].numbers[roman_idx], Some(4));
    }

    #[test]
    fn overlong_lines_skip_numeral_extraction() {
        let long_line = "X".repeat(MAX_TITLE_LENGTH + 1);
        let ctx = ArticleContext::build(&long_line, MAX_TITLE_LENGTH);
        assert!(ctx.lines[0].numbers.iter().all(|n| n.is_none()));
    }
}
