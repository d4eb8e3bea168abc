//! Top-level orchestration: wires the article context builder, candidate
//! generator, and selector together into a single entry point.

use crate::article::ArticleContext;
use crate::candidate::generate_candidates;
use crate::config::MAX_TITLE_LENGTH;
use crate::scoring::ContentEntry;
use crate::selector::select;
use serde::Serialize;

/// The inferred table of contents: its entries, the template that produced
/// them, and the final beauty score.
#[derive(Debug, Serialize)]
pub struct Toc {
    pub content: Vec<ContentEntry>,
    pub template: String,
    pub beauty: f64,
}

/// Infer the table of contents of `article`, or `None` if no candidate
/// pattern clears `BEAUTY_MIN_2`. The caller is expected to have already
/// normalized line endings to `\n`.
pub fn infer_toc(article: &str) -> Option<Toc> {
    let context = ArticleContext::build(article, MAX_TITLE_LENGTH);
    let patterns = generate_candidates(&context);
    let selection = select(&context, patterns)?;
    Some(Toc {
        content: selection.content,
        template: selection.template,
        beauty: selection.beauty,
    })
}
