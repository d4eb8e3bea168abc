//! Candidate generation: two independent paths produce `Pattern`s from an
//! `ArticleContext` — one walking each numeral parser's matches grouped by
//! literal prefix/suffix, the other walking common leading-token sequences.

use crate::article::{ArticleContext, LineRecord};
use crate::config::{
    BEAUTY_MIN_1, FACTOR_TEXT_PREFIX, KEYWORD_UNIQUE_FACTOR, MAX_CONTENTS_LENGTH, MAX_TITLE_LENGTH,
    MIN_CONTENTS, PREFIX_MIN_RATIO,
};
use crate::numerals::{char_class, NumeralParser, PARSERS};
use crate::pattern::{Pattern, PatternKey, PatternKind};
use crate::scoring::{b_num, b_size, b_title, ContentEntry};
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// A numeral match recovered from one line, re-derived from the line's raw
/// text (the article context only caches the decoded number, not the full
/// match, to keep its own footprint small).
struct NumericMatch {
    title: String,
    cursor: usize,
    prefix: String,
    infix: String,
    suffix: String,
    number: i64,
}

/// Run both candidate-generation paths and return every pattern that cleared
/// `BEAUTY_MIN_1`.
pub fn generate_candidates(article: &ArticleContext) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    generate_number_patterns(article, &mut patterns);
    generate_prefix_patterns(article, &mut patterns);
    patterns
}

fn has_glob_specials(s: &str) -> bool {
    s.contains('/') || s.contains('*')
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn common_char_prefix<'a>(mut strings: impl Iterator<Item = &'a str>) -> String {
    let first = match strings.next() {
        Some(s) => s,
        None => return String::new(),
    };
    let mut prefix: Vec<char> = first.chars().collect();
    for s in strings {
        let chars: Vec<char> = s.chars().collect();
        let mut i = 0;
        while i < prefix.len() && i < chars.len() && prefix[i] == chars[i] {
            i += 1;
        }
        prefix.truncate(i);
        if prefix.is_empty() {
            break;
        }
    }
    prefix.into_iter().collect()
}

/// Emit the glob and regex-literal forms of one committed number pattern,
/// falling back to a regex literal for the glob slot when the prefix or lcp
/// contains a character the glob syntax can't represent literally.
fn emit_number_templates(
    parser: &NumeralParser,
    prefix: &str,
    lcp: &str,
    charset: &[char],
    beauty: f64,
    contents: Vec<ContentEntry>,
    patterns: &mut Vec<Pattern>,
) {
    let collapsed_prefix = collapse_whitespace(prefix);
    let collapsed_lcp = collapse_whitespace(lcp);

    let glob_template = if has_glob_specials(&collapsed_prefix) || has_glob_specials(&collapsed_lcp)
    {
        format!(
            "/{}.*{}/u",
            regex::escape(&collapsed_prefix),
            regex::escape(&collapsed_lcp)
        )
    } else {
        format!("{collapsed_prefix}*{collapsed_lcp}")
    };

    let charset_class = char_class(charset);
    let regex_template = format!(
        r"/^\s*{}[{}]+{}/",
        regex::escape(prefix),
        charset_class,
        regex::escape(lcp)
    );

    let key = PatternKey {
        parser: Some(parser.name),
        prefix: prefix.to_string(),
        suffix: lcp.to_string(),
    };

    patterns.push(Pattern {
        kind: PatternKind::Number,
        template: glob_template,
        key: key.clone(),
        priority: 10 * parser.priority as u32,
        beauty,
        parser_name: Some(parser.name),
        prefix_uniqueness: None,
        contents: contents.clone(),
    });
    patterns.push(Pattern {
        kind: PatternKind::Number,
        template: regex_template,
        key,
        priority: 10 * parser.priority as u32 + 1,
        beauty,
        parser_name: Some(parser.name),
        prefix_uniqueness: None,
        contents,
    });
}

fn commit_number_pattern(
    parser: &NumeralParser,
    prefix: &str,
    matches: &[&NumericMatch],
    article: &ArticleContext,
    patterns: &mut Vec<Pattern>,
) {
    let contents: Vec<ContentEntry> = matches
        .iter()
        .map(|m| ContentEntry {
            title: m.title.clone(),
            cursor: m.cursor,
            number: Some(m.number),
        })
        .collect();

    let beta1 = b_num(&contents);
    if beta1 < BEAUTY_MIN_1 {
        return;
    }
    let beta2 = b_size(&contents, article.chars) * b_title(&contents);
    if beta1 * beta2 < BEAUTY_MIN_1 {
        return;
    }

    let lcp = common_char_prefix(matches.iter().map(|m| m.suffix.as_str()));

    let mut charset: Vec<char> = parser.primary.to_vec();
    for &c in parser.optional {
        if matches.iter().any(|m| m.infix.contains(c)) {
            charset.push(c);
        }
    }
    charset.sort_unstable();
    charset.dedup();

    emit_number_templates(parser, prefix, &lcp, &charset, beta1 * beta2, contents, patterns);
}

fn generate_number_patterns(article: &ArticleContext, patterns: &mut Vec<Pattern>) {
    for (idx, parser) in PARSERS.iter().enumerate() {
        let mut by_prefix: HashMap<String, Vec<NumericMatch>> = HashMap::new();

        for line in &article.lines {
            if line.raw.len() >= MAX_TITLE_LENGTH {
                continue;
            }
            if line.numbers[idx].is_none() {
                continue;
            }
            let Some(m) = parser.extract(&line.raw) else {
                continue;
            };
            let group_prefix = m.prefix.trim_start().to_string();
            by_prefix
                .entry(group_prefix)
                .or_default()
                .push(NumericMatch {
                    title: line.raw.trim().to_string(),
                    cursor: line.cursor,
                    prefix: m.prefix,
                    infix: m.infix,
                    suffix: m.suffix,
                    number: m.number,
                });
        }

        for (prefix, group) in &by_prefix {
            if group.len() >= MIN_CONTENTS {
                let refs: Vec<&NumericMatch> = group.iter().collect();
                commit_number_pattern(parser, prefix, &refs, article, patterns);
            }

            let mut by_suffix_bucket: HashMap<String, Vec<&NumericMatch>> = HashMap::new();
            for m in group {
                let trimmed = m.suffix.trim_start();
                let tokens = tokenize(trimmed);
                let mut consumed = 0usize;
                for tok in &tokens {
                    consumed += tok.len();
                    let bucket_key = trimmed[..consumed].to_string();
                    by_suffix_bucket.entry(bucket_key).or_default().push(m);
                }
            }
            for bucket in by_suffix_bucket.values() {
                if bucket.len() >= MIN_CONTENTS {
                    commit_number_pattern(parser, prefix, bucket, article, patterns);
                }
            }
        }
    }
}

fn starts_with_letter(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_alphabetic())
}

fn emit_prefix_pattern(
    prefix_tokens: &[String],
    suffix: &str,
    beauty: f64,
    contents: Vec<ContentEntry>,
    patterns: &mut Vec<Pattern>,
) {
    let prefix = prefix_tokens.concat();

    let collapsed_prefix = collapse_whitespace(&prefix);
    let collapsed_suffix = collapse_whitespace(suffix);
    let template = if has_glob_specials(&collapsed_prefix) || has_glob_specials(&collapsed_suffix)
    {
        format!(
            "/{}.*{}/u",
            regex::escape(&collapsed_prefix),
            regex::escape(&collapsed_suffix)
        )
    } else {
        format!("{collapsed_prefix}*{collapsed_suffix}")
    };

    patterns.push(Pattern {
        kind: PatternKind::Prefix,
        template,
        key: PatternKey {
            parser: None,
            prefix,
            suffix: suffix.to_string(),
        },
        priority: 10,
        beauty,
        parser_name: None,
        prefix_uniqueness: Some(beauty),
        contents,
    });
}

/// Search a terminal prefix's body for a keyword token whose bucket clears
/// both the selectivity ratio and the beauty threshold, emitting at most one
/// pattern per qualifying bucket.
fn search_keyword(
    prefix_tokens: &[String],
    lines: &[&LineRecord],
    d: f64,
    article: &ArticleContext,
    patterns: &mut Vec<Pattern>,
) {
    let depth = prefix_tokens.len();
    let mut buckets: HashMap<String, Vec<&LineRecord>> = HashMap::new();

    for line in lines {
        if line.tokens.len() <= depth {
            continue;
        }
        let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();
        for tok in &line.tokens[depth..] {
            if seen.insert(tok.as_str()) {
                buckets.entry(tok.clone()).or_default().push(line);
            }
        }
    }

    for (token, bucket) in &buckets {
        if bucket.len() < MIN_CONTENTS {
            continue;
        }
        if bucket.len() as f64 / d < PREFIX_MIN_RATIO {
            continue;
        }

        // The text following the keyword token, per bucket member.
        let after: Vec<String> = bucket
            .iter()
            .map(|line| {
                let joined = line.tokens[depth..].join("");
                let idx = joined.find(token.as_str()).unwrap_or(0);
                joined[idx + token.len()..].to_string()
            })
            .collect();
        let lcp = common_char_prefix(after.iter().map(|s| s.as_str()));
        let suffix = format!("{token}{lcp}");

        let subset: Vec<ContentEntry> = lines
            .iter()
            .filter(|line| line.raw.trim().contains(&suffix))
            .map(|line| ContentEntry {
                title: line.raw.trim().to_string(),
                cursor: line.cursor,
                number: None,
            })
            .collect();

        let beta1 = (bucket.len() as f64 / d).powf(KEYWORD_UNIQUE_FACTOR / 10.0);
        let beta2 = b_title(&subset) * b_size(&subset, article.chars);
        if beta1 * beta2 < BEAUTY_MIN_1 {
            continue;
        }
        emit_prefix_pattern(prefix_tokens, &suffix, beta1 * beta2, subset, patterns);
    }
}

fn find_prefix(
    prefix_tokens: &mut Vec<String>,
    lines: &[&LineRecord],
    d: f64,
    article: &ArticleContext,
    patterns: &mut Vec<Pattern>,
) {
    let depth = prefix_tokens.len();
    let mut by_next: HashMap<String, Vec<&LineRecord>> = HashMap::new();
    for &line in lines {
        if let Some(tok) = line.tokens.get(depth) {
            by_next.entry(tok.clone()).or_default().push(line);
        }
    }

    let mut extended = false;
    for (token, group) in by_next {
        if group.len() < MIN_CONTENTS {
            continue;
        }
        if group.len() as f64 / d < PREFIX_MIN_RATIO {
            continue;
        }
        extended = true;
        prefix_tokens.push(token);
        find_prefix(prefix_tokens, &group, d, article, patterns);
        prefix_tokens.pop();
    }

    if !extended {
        search_keyword(prefix_tokens.as_slice(), lines, d, article, patterns);
    }
}

fn generate_prefix_patterns(article: &ArticleContext, patterns: &mut Vec<Pattern>) {
    let mut by_first_token: HashMap<String, Vec<&LineRecord>> = HashMap::new();
    for line in &article.lines {
        if let Some(first) = line.tokens.first() {
            by_first_token.entry(first.clone()).or_default().push(line);
        }
    }

    let too_generic = MAX_CONTENTS_LENGTH as f64 / PREFIX_MIN_RATIO;

    for (t0, lines) in by_first_token {
        if lines.len() as f64 > too_generic {
            continue;
        }
        if lines.len() < MIN_CONTENTS {
            continue;
        }
        let token_count = *article.token_counts.get(&t0).unwrap_or(&0) as f64;
        let d = token_count * if starts_with_letter(&t0) { FACTOR_TEXT_PREFIX } else { 1.0 };
        if d <= 0.0 || lines.len() as f64 / d < PREFIX_MIN_RATIO {
            continue;
        }

        let mut prefix_tokens = vec![t0];
        find_prefix(&mut prefix_tokens, &lines, d, article, patterns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleContext;

    fn sample_han_article() -> String {
        let mut out = String::new();
        for n in 1..=20 {
            out.push_str(&format!("第{}章 Title{}\n", han_literal(n), n));
            out.push_str(&"x".repeat(480));
            out.push('\n');
        }
        out
    }

    fn han_literal(n: i64) -> &'static str {
        // Small fixed set covering 1..=20, enough for the smoke test below.
        match n {
            1 => "一",
            2 => "二",
            3 => "三",
            4 => "四",
            5 => "五",
            6 => "六",
            7 => "七",
            8 => "八",
            9 => "九",
            10 => "十",
            11 => "十一",
            12 => "十二",
            13 => "十三",
            14 => "十四",
            15 => "十五",
            16 => "十六",
            17 => "十七",
            18 => "十八",
            19 => "十九",
            20 => "二十",
            _ => unreachable!(),
        }
    }

    #[test]
    fn han_chapter_lines_produce_a_number_pattern() {
        let article_text = sample_han_article();
        let article = ArticleContext::build(&article_text, MAX_TITLE_LENGTH);
        let patterns = generate_candidates(&article);
        assert!(
            patterns
                .iter()
                .any(|p| p.kind == PatternKind::Number && p.contents.len() >= MIN_CONTENTS),
            "expected at least one number pattern from Han chapter headings"
        );
    }

    #[test]
    fn repeated_note_prefix_without_substance_is_rejected() {
        let mut text = String::new();
        for i in 0..50 {
            text.push_str(&format!("Note: filler line {i}\n"));
        }
        let article = ArticleContext::build(&text, MAX_TITLE_LENGTH);
        let patterns = generate_candidates(&article);
        // Every line is identical in shape, so no keyword is selective
        // enough to pass PREFIX_MIN_RATIO against the full population.
        assert!(patterns.iter().all(|p| p.kind != PatternKind::Prefix));
    }
}
