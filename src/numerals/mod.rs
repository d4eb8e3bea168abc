//! Numeral parsers: pluggable extractors that find the first numeral of a
//! given system in a line and decode it to an integer.
//!
//! Nine parsers are configured, one `NumeralParser` value each, built once
//! into a process-wide static list. None of them carry mutable state; the
//! only thing built lazily is the compiled `Regex` each one scans with.

mod arabic;
mod han;
mod roman;

use regex::Regex;
use std::sync::LazyLock;

/// Chapter numbers larger than this are treated as garbage: as if no number
/// had been found at all.
const MAX_NUMBER: i64 = 1 << 62;

/// Which numeral system a parser belongs to, used as the `key` discriminant
/// when patterns are deduplicated and as a human-facing group tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralGroup {
    Han,
    Roman,
    Numeric,
}

/// A numeral match against a single line: the text before and after the
/// matched numeral run, the run itself, and its decoded value.
#[derive(Debug, Clone)]
pub struct Match {
    pub prefix: String,
    pub infix: String,
    pub suffix: String,
    pub number: i64,
}

/// An immutable extractor for one numeral system.
pub struct NumeralParser {
    pub name: &'static str,
    pub group: NumeralGroup,
    pub priority: u8,
    /// Characters required to be present in a match (for single-charset
    /// parsers, the whole charset; for mixed parsers, see `require_mixed`).
    pub primary: &'static [char],
    /// Characters permitted, but not individually required, in a match.
    pub optional: &'static [char],
    /// When set, a match must contain at least one character from `primary`
    /// *and* at least one from `optional` to be accepted. This is what
    /// distinguishes the priority-2 "mixed" parsers (which exist precisely to
    /// catch forms that strictly require both sub-charsets) from the
    /// priority-1 parsers that handle each sub-charset alone.
    pub require_mixed: bool,
    regex: Regex,
    decode: fn(&str) -> Option<i64>,
}

impl NumeralParser {
    /// Find the first numeral in `line` and decode it.
    pub fn extract(&self, line: &str) -> Option<Match> {
        let found = self.regex.find(line)?;
        let infix = found.as_str();

        if self.require_mixed {
            let has_primary = infix.chars().any(|c| self.primary.contains(&c));
            let has_optional = infix.chars().any(|c| self.optional.contains(&c));
            if !(has_primary && has_optional) {
                return None;
            }
        }

        let number = (self.decode)(infix)?;
        if number <= 0 || number > MAX_NUMBER {
            return None;
        }

        Some(Match {
            prefix: line[..found.start()].to_string(),
            infix: infix.to_string(),
            suffix: line[found.end()..].to_string(),
            number,
        })
    }

    /// The charset actually available to this parser: `primary` plus
    /// `optional`, used by the candidate generator to synthesize a regex
    /// character class for generated templates.
    pub fn full_charset(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.primary.iter().chain(self.optional).copied().collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

fn build_regex(chars: &[char], anchored: bool) -> Regex {
    let class = char_class(chars);
    let pattern = if anchored {
        format!(r"\b[{class}]+\b")
    } else {
        format!(r"[{class}]+")
    };
    Regex::new(&pattern).expect("numeral parser charset produces a valid regex")
}

/// Build a `[...]`-body character class from an explicit char list,
/// compacting consecutive code points into `a-z`-style ranges. Shared with
/// the candidate generator, which synthesizes the same kind of class for a
/// parser's *effective* (observed) charset rather than its full one.
pub(crate) fn char_class(chars: &[char]) -> String {
    compact_ranges(chars)
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                escape_class_char(start)
            } else {
                format!("{}-{}", escape_class_char(start), escape_class_char(end))
            }
        })
        .collect()
}

/// Fuse a sorted, deduplicated char list into inclusive code-point ranges.
pub(crate) fn compact_ranges(chars: &[char]) -> Vec<(char, char)> {
    let mut sorted: Vec<char> = chars.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges: Vec<(char, char)> = Vec::new();
    for c in sorted {
        match ranges.last_mut() {
            Some((_, end)) if (*end as u32) + 1 == c as u32 => *end = c,
            _ => ranges.push((c, c)),
        }
    }
    ranges
}

fn escape_class_char(c: char) -> String {
    match c {
        '\\' | ']' | '^' | '-' => format!("\\{c}"),
        _ => c.to_string(),
    }
}

const ASCII_UPPER: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];
const ASCII_LOWER: [char; 7] = ['i', 'v', 'x', 'l', 'c', 'd', 'm'];
const UNICODE_ROMAN: [char; 32] = [
    '\u{2160}', '\u{2161}', '\u{2162}', '\u{2163}', '\u{2164}', '\u{2165}', '\u{2166}', '\u{2167}',
    '\u{2168}', '\u{2169}', '\u{216A}', '\u{216B}', '\u{216C}', '\u{216D}', '\u{216E}', '\u{216F}',
    '\u{2170}', '\u{2171}', '\u{2172}', '\u{2173}', '\u{2174}', '\u{2175}', '\u{2176}', '\u{2177}',
    '\u{2178}', '\u{2179}', '\u{217A}', '\u{217B}', '\u{217C}', '\u{217D}', '\u{217E}', '\u{217F}',
];
const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const FULLWIDTH_DIGITS: [char; 10] = [
    '０', '１', '２', '３', '４', '５', '６', '７', '８', '９',
];
const HAN_SIMPLIFIED_ALL: [char; 16] = [
    '零', '〇', '一', '二', '两', '兩', '三', '四', '五', '六', '七', '八', '九', '十', '百', '千',
];
const HAN_FORMAL_ALL: [char; 15] = [
    '壹', '贰', '貳', '叁', '參', '肆', '伍', '陆', '陸', '柒', '捌', '玖', '拾', '佰', '仟',
];

fn decode_ascii_roman(s: &str) -> Option<i64> {
    roman::decode_ascii(&s.to_uppercase())
}

fn decode_unicode_roman(s: &str) -> Option<i64> {
    roman::decode_unicode(s)
}

/// The nine configured numeral parsers, built once.
pub static PARSERS: LazyLock<Vec<NumeralParser>> = LazyLock::new(|| {
    vec![
        NumeralParser {
            name: "roman-ascii-upper",
            group: NumeralGroup::Roman,
            priority: 1,
            primary: &ASCII_UPPER,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&ASCII_UPPER, true),
            decode: decode_ascii_roman,
        },
        NumeralParser {
            name: "roman-ascii-lower",
            group: NumeralGroup::Roman,
            priority: 1,
            primary: &ASCII_LOWER,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&ASCII_LOWER, true),
            decode: decode_ascii_roman,
        },
        NumeralParser {
            name: "roman-ascii-mixed-case",
            group: NumeralGroup::Roman,
            priority: 2,
            primary: &ASCII_UPPER,
            optional: &ASCII_LOWER,
            require_mixed: true,
            regex: build_regex(
                &ASCII_UPPER
                    .iter()
                    .chain(ASCII_LOWER.iter())
                    .copied()
                    .collect::<Vec<_>>(),
                true,
            ),
            decode: decode_ascii_roman,
        },
        NumeralParser {
            name: "roman-unicode",
            group: NumeralGroup::Roman,
            priority: 1,
            primary: &UNICODE_ROMAN,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&UNICODE_ROMAN, false),
            decode: decode_unicode_roman,
        },
        NumeralParser {
            name: "han-common",
            group: NumeralGroup::Han,
            priority: 1,
            primary: &HAN_SIMPLIFIED_ALL,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&HAN_SIMPLIFIED_ALL, false),
            decode: han::decode,
        },
        NumeralParser {
            name: "han-formal",
            group: NumeralGroup::Han,
            priority: 1,
            primary: &HAN_FORMAL_ALL,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&HAN_FORMAL_ALL, false),
            decode: han::decode,
        },
        NumeralParser {
            name: "han-mixed",
            group: NumeralGroup::Han,
            priority: 2,
            primary: &HAN_SIMPLIFIED_ALL,
            optional: &HAN_FORMAL_ALL,
            require_mixed: true,
            regex: build_regex(
                &HAN_SIMPLIFIED_ALL
                    .iter()
                    .chain(HAN_FORMAL_ALL.iter())
                    .copied()
                    .collect::<Vec<_>>(),
                false,
            ),
            decode: han::decode,
        },
        NumeralParser {
            name: "arabic",
            group: NumeralGroup::Numeric,
            priority: 1,
            primary: &ASCII_DIGITS,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&ASCII_DIGITS, true),
            decode: arabic::decode,
        },
        NumeralParser {
            name: "arabic-fullwidth",
            group: NumeralGroup::Numeric,
            priority: 1,
            primary: &FULLWIDTH_DIGITS,
            optional: &[],
            require_mixed: false,
            regex: build_regex(&FULLWIDTH_DIGITS, false),
            decode: arabic::decode,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_roman_extracts_prefix_and_number() {
        let parser = &PARSERS[0];
        let m = parser.extract("Chapter IV: The Duel").unwrap();
        assert_eq!(m.prefix, "Chapter ");
        assert_eq!(m.infix, "IV");
        assert_eq!(m.number, 4);
        assert_eq!(m.suffix, ": The Duel");
    }

    #[test]
    fn lowercase_roman_does_not_match_uppercase() {
        let lower = &PARSERS[1];
        assert!(lower.extract("Chapter IV").is_none());
    }

    #[test]
    fn mixed_case_roman_requires_both_cases() {
        let mixed = PARSERS
            .iter()
            .find(|p| p.name == "roman-ascii-mixed-case")
            .unwrap();
        assert!(mixed.extract("Chapter IV.").is_none());
        let m = mixed.extract("Chapter iV.").unwrap();
        assert_eq!(m.number, 4);
    }

    #[test]
    fn han_common_extracts() {
        let han = PARSERS.iter().find(|p| p.name == "han-common").unwrap();
        let m = han.extract("第二十章 开端").unwrap();
        assert_eq!(m.number, 20);
        assert_eq!(m.prefix, "第");
        assert_eq!(m.suffix, "章 开端");
    }

    #[test]
    fn arabic_extracts_word_bounded_digits() {
        let arabic = PARSERS.iter().find(|p| p.name == "arabic").unwrap();
        let m = arabic.extract("Chapter 12").unwrap();
        assert_eq!(m.number, 12);
    }

    #[test]
    fn overflow_numbers_are_rejected() {
        let arabic = PARSERS.iter().find(|p| p.name == "arabic").unwrap();
        assert!(arabic.extract("99999999999999999999").is_none());
    }

    #[test]
    fn compact_ranges_fuses_consecutive_code_points() {
        let chars = ['a', 'b', 'c', 'e', 'f', 'z'];
        assert_eq!(
            compact_ranges(&chars),
            vec![('a', 'c'), ('e', 'f'), ('z', 'z')]
        );
    }
}
