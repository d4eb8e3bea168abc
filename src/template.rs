//! Template compiler: turns a pattern's visible `template` string (a glob-like
//! pattern or an explicit regex literal) into a `Matcher` that re-scans the
//! article for lines of that shape.

use crate::error::TocError;
use regex::Regex;

/// A compiled template. A syntax error in a regex-literal template localizes
/// to `NeverMatch` rather than failing the whole computation.
pub enum Matcher {
    Regex(Regex),
    NeverMatch,
}

impl Matcher {
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(line),
            Matcher::NeverMatch => false,
        }
    }
}

/// Compile a template string into a `Matcher`.
pub fn parse_content_template(template: &str) -> Matcher {
    let pattern = if let Some((body, flags)) = parse_regex_literal(template) {
        apply_flags(body, flags)
    } else {
        format!(r"^\s*(?:{})", translate_glob(template))
    };

    match Regex::new(&pattern) {
        Ok(re) => Matcher::Regex(re),
        Err(source) => {
            let err = TocError::RegexSyntax {
                template: template.to_string(),
                source,
            };
            log::warn!("{err}, localizing to a never-match template");
            Matcher::NeverMatch
        }
    }
}

/// Split a `/body/flags` literal. A template counts as a regex literal when
/// it starts with `/` and has a second, unescaped `/` later in the string.
fn parse_regex_literal(template: &str) -> Option<(&str, &str)> {
    if !template.starts_with('/') {
        return None;
    }
    let rest = &template[1..];
    let mut close = None;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '/' => close = Some(i),
            _ => {}
        }
    }
    let close = close?;
    Some((&rest[..close], &rest[close + 1..]))
}

fn apply_flags(body: &str, flags: &str) -> String {
    if flags.contains('i') {
        format!("(?i){body}")
    } else {
        body.to_string()
    }
}

fn is_extra_regex_metachar(c: char) -> bool {
    matches!(c, '.' | '^' | '$' | '|' | '(' | ')' | '[' | ']' | '{' | '}' | '+' | '\\')
}

/// Translate a glob-like template into a regex body, character by character:
/// a space becomes a whitespace run, `*` becomes any run, `?` becomes any
/// single character, and any other regex metacharacter is escaped so it
/// matches itself literally.
fn translate_glob(template: &str) -> String {
    let mut out = String::new();
    for c in template.chars() {
        match c {
            ' ' => out.push_str(r"\s+"),
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ if is_extra_regex_metachar(c) => out.push_str(&regex::escape(&c.to_string())),
            _ => out.push(c),
        }
    }
    out
}
