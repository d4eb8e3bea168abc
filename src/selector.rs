//! Selector: deduplicates generated patterns, keeps the top few per family,
//! re-applies each surviving template to the article, re-scores, and returns
//! the single best candidate.

use crate::article::ArticleContext;
use crate::config::{BEAUTY_MIN_2, MAX_TITLE_LENGTH, TEMPLATE_COUNT_1};
use crate::numerals::PARSERS;
use crate::pattern::{Pattern, PatternKind};
use crate::scoring::{b_num, b_size, b_title, ContentEntry};
use crate::template::parse_content_template;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// The winning table of contents, along with the template that produced it
/// and its final beauty score.
pub struct Selection {
    pub content: Vec<ContentEntry>,
    pub template: String,
    pub beauty: f64,
}

pub fn select(article: &ArticleContext, patterns: Vec<Pattern>) -> Option<Selection> {
    let mut seen_templates = HashSet::new();
    let deduped: Vec<Pattern> = patterns
        .into_iter()
        .filter(|p| seen_templates.insert(p.template.clone()))
        .collect();

    let mut numeric: Vec<Pattern> = deduped
        .iter()
        .filter(|p| p.kind == PatternKind::Number)
        .cloned()
        .collect();
    let mut prefix: Vec<Pattern> = deduped
        .iter()
        .filter(|p| p.kind == PatternKind::Prefix)
        .cloned()
        .collect();

    sort_by_beauty_desc(&mut numeric);
    sort_by_beauty_desc(&mut prefix);
    numeric.truncate(TEMPLATE_COUNT_1);
    prefix.truncate(TEMPLATE_COUNT_1);

    let survivors: Vec<Pattern> = numeric.into_iter().chain(prefix).collect();

    // Each surviving pattern's re-scan of the article and re-score is
    // independent of every other's, per §5's permission to parallelize the
    // per-pattern rescoring; the final sort below by beauty then priority
    // makes the result independent of the order workers finish in.
    let mut rescored: Vec<(String, u32, Vec<ContentEntry>, f64)> = survivors
        .into_par_iter()
        .map(|pattern| rescore(article, pattern))
        .collect();

    rescored.sort_by(|a, b| {
        b.3.partial_cmp(&a.3)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });

    let (template, _priority, content, beauty) = rescored.into_iter().next()?;
    if beauty < BEAUTY_MIN_2 {
        return None;
    }
    Some(Selection {
        content,
        template,
        beauty,
    })
}

fn sort_by_beauty_desc(patterns: &mut [Pattern]) {
    patterns.sort_by(|a, b| b.beauty.partial_cmp(&a.beauty).unwrap_or(Ordering::Equal));
}

fn rescore(article: &ArticleContext, pattern: Pattern) -> (String, u32, Vec<ContentEntry>, f64) {
    let matcher = parse_content_template(&pattern.template);
    let parser_index = pattern
        .parser_name
        .and_then(|name| PARSERS.iter().position(|p| p.name == name));

    let mut content = Vec::new();
    for line in &article.lines {
        if line.raw.len() > MAX_TITLE_LENGTH {
            continue;
        }
        let trimmed = line.raw.trim();
        if !matcher.is_match(trimmed) {
            continue;
        }
        let number = parser_index.and_then(|idx| line.numbers[idx]);
        content.push(ContentEntry {
            title: trimmed.to_string(),
            cursor: line.cursor,
            number,
        });
    }

    let beta1 = b_size(&content, article.chars) * b_title(&content);
    let beta2 = match pattern.kind {
        PatternKind::Number => b_num(&content),
        PatternKind::Prefix => pattern.prefix_uniqueness.unwrap_or(0.0),
    };

    (pattern.template, pattern.priority, content, beta1 * beta2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::generate_candidates;
    use crate::config::MAX_TITLE_LENGTH as MTL;

    #[test]
    fn empty_article_yields_no_selection() {
        let article = ArticleContext::build("", MTL);
        let patterns = generate_candidates(&article);
        assert!(select(&article, patterns).is_none());
    }

    #[test]
    fn chapter_headings_select_a_template_with_full_coverage() {
        let mut text = String::new();
        for n in 1..=20 {
            text.push_str(&format!("Chapter {n}. Title {n}\n"));
            text.push_str(&"x".repeat(480));
            text.push('\n');
        }
        let article = ArticleContext::build(&text, MTL);
        let patterns = generate_candidates(&article);
        let selection = select(&article, patterns).expect("expected a winning template");
        assert_eq!(selection.content.len(), 20);
        assert!(selection.beauty >= BEAUTY_MIN_2);
    }
}
