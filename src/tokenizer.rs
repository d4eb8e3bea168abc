//! Script-homogeneous tokenizer.
//!
//! Splits a line into a sequence of tokens in a single pass: a maximal run of
//! letters from one script, a maximal run of digits, or exactly one other
//! character. Used both to build the per-line, per-token frequency map in the
//! article context and to walk prefix-family candidates in the generator.

/// Scripts recognized as letter runs. Anything outside these (including CJK
/// ideographs, which Unicode does not classify as alphabetic in the
/// script-neutral sense used here) falls through to single-character tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Georgian,
    Armenian,
    Arabic,
    Tibetan,
}

fn classify_script(c: char) -> Option<Script> {
    match c {
        'A'..='Z' | 'a'..='z' | '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => {
            Some(Script::Latin)
        }
        '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}' => Some(Script::Cyrillic),
        '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}' => Some(Script::Greek),
        '\u{10A0}'..='\u{10FF}' | '\u{1C90}'..='\u{1CBF}' => Some(Script::Georgian),
        '\u{0530}'..='\u{058F}' | '\u{FB13}'..='\u{FB17}' => Some(Script::Armenian),
        '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' => {
            Some(Script::Arabic)
        }
        '\u{0F00}'..='\u{0FFF}' => Some(Script::Tibetan),
        _ => None,
    }
}

/// Unicode decimal digits, including full-width Arabic digits.
fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '\u{FF10}'..='\u{FF19}')
}

/// Split `line` into ordered, script-homogeneous tokens. Leading/trailing
/// whitespace is trimmed before tokenizing; internal whitespace simply breaks
/// runs (it is not itself a script or a digit, so each space becomes its own
/// single-character token).
pub fn tokenize(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut tokens = Vec::new();
    let mut chars = trimmed.chars().peekable();

    while let Some(&c) = chars.peek() {
        if let Some(script) = classify_script(c) {
            let mut tok = String::new();
            while let Some(&c2) = chars.peek() {
                if classify_script(c2) == Some(script) {
                    tok.push(c2);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(tok);
        } else if is_digit_char(c) {
            let mut tok = String::new();
            while let Some(&c2) = chars.peek() {
                if is_digit_char(c2) {
                    tok.push(c2);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(tok);
        } else {
            tokens.push(c.to_string());
            chars.next();
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_letters_digits_and_punctuation() {
        assert_eq!(
            tokenize("Chapter 12: The Beginning"),
            vec![
                "Chapter", " ", "12", ":", " ", "The", " ", "Beginning"
            ]
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(tokenize("  Hello  "), vec!["Hello"]);
    }

    #[test]
    fn splits_consecutive_ideographs_into_single_chars() {
        assert_eq!(tokenize("第一章"), vec!["第", "一", "章"]);
    }

    #[test]
    fn breaks_runs_at_script_boundary() {
        assert_eq!(tokenize("ЧастьI"), vec!["Часть", "I"]);
    }

    #[test]
    fn full_width_digits_form_a_run() {
        assert_eq!(tokenize("０１２"), vec!["０１２"]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }
}
