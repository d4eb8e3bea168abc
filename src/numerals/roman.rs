//! Roman numeral decoding, shared by the ASCII, mixed-case, and Unicode
//! Roman-numeral-codepoint parsers.

/// Value of an uppercase ASCII Roman numeral letter.
pub fn ascii_letter_value(c: char) -> Option<i64> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Value of one of the Unicode "Number Forms" Roman numeral codepoints
/// (U+2160-U+2182), both the capital and small variants. A handful of these
/// represent a whole number in a single codepoint (e.g. U+2167 ROMAN NUMERAL
/// EIGHT), which `decode` handles by treating each codepoint as a one-letter
/// run whose "letter value" is its whole numeric value.
pub fn unicode_codepoint_value(c: char) -> Option<i64> {
    const CAPITALS: [(char, i64); 16] = [
        ('\u{2160}', 1),
        ('\u{2161}', 2),
        ('\u{2162}', 3),
        ('\u{2163}', 4),
        ('\u{2164}', 5),
        ('\u{2165}', 6),
        ('\u{2166}', 7),
        ('\u{2167}', 8),
        ('\u{2168}', 9),
        ('\u{2169}', 10),
        ('\u{216A}', 11),
        ('\u{216B}', 12),
        ('\u{216C}', 50),
        ('\u{216D}', 100),
        ('\u{216E}', 500),
        ('\u{216F}', 1000),
    ];
    const SMALL: [(char, i64); 16] = [
        ('\u{2170}', 1),
        ('\u{2171}', 2),
        ('\u{2172}', 3),
        ('\u{2173}', 4),
        ('\u{2174}', 5),
        ('\u{2175}', 6),
        ('\u{2176}', 7),
        ('\u{2177}', 8),
        ('\u{2178}', 9),
        ('\u{2179}', 10),
        ('\u{217A}', 11),
        ('\u{217B}', 12),
        ('\u{217C}', 50),
        ('\u{217D}', 100),
        ('\u{217E}', 500),
        ('\u{217F}', 1000),
    ];
    CAPITALS
        .iter()
        .chain(SMALL.iter())
        .find(|&&(ch, _)| ch == c)
        .map(|&(_, v)| v)
}

/// Decode a Roman numeral string with a pluggable per-character value
/// function. The string is grouped into runs of identical characters; each
/// run contributes `value * length`. When a run's value exceeds the previous
/// run's, the subtractive form is in play: the previously-added piece is
/// cancelled (`-2 * previous_value * previous_length`) before the new run is
/// added, which is equivalent to having subtracted it up front.
fn decode_runs(s: &str, value_of: impl Fn(char) -> Option<i64>) -> Option<i64> {
    let mut acc: i64 = 0;
    let mut prev_value: i64 = 0;
    let mut prev_len: i64 = 0;
    let mut any = false;

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let value = value_of(c)?;
        let mut len: i64 = 1;
        while chars.peek() == Some(&c) {
            len += 1;
            chars.next();
        }

        if prev_len > 0 && value > prev_value {
            acc -= 2 * prev_value * prev_len;
        }
        acc += value * len;

        prev_value = value;
        prev_len = len;
        any = true;
    }

    any.then_some(acc)
}

/// Decode an ASCII Roman numeral (already normalized to uppercase).
pub fn decode_ascii(s: &str) -> Option<i64> {
    decode_runs(s, ascii_letter_value)
}

/// Decode a run of Unicode Roman numeral codepoints.
pub fn decode_unicode(s: &str) -> Option<i64> {
    decode_runs(s, unicode_codepoint_value)
}
