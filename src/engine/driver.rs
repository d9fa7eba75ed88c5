// Orchestrates single-match and all-matches modes, advances the search
// cursor for query mode, and rewrites the text for replace mode.
use super::bindings::Bindings;
use super::compiler::compile;
use super::error::CompileError;
use super::matcher::find_first_match;
use super::renderer::render_template;

/// Result shape for [`find_all`]. `replacement` being present or absent
/// picks which variant comes back: query mode collects bindings, replace
/// mode returns rewritten text.
pub enum FindAllOutcome {
    Matches(Vec<Bindings>),
    Rewritten(String),
}

/// Result shape for [`find_first`].
pub enum FindFirstOutcome {
    Match(Bindings),
    Rewritten(String),
}

/// `find_all(text, pattern, replacement)`: iterate every match. In query
/// mode, returns the bindings for each match in order. In replace mode,
/// splices in the rendered replacement and keeps searching from just past
/// what it wrote, so a replacement can itself be re-matched by a later
/// iteration.
pub fn find_all(
    text: &str,
    pattern: &str,
    replacement: Option<&str>,
) -> Result<FindAllOutcome, CompileError> {
    let tokens = compile(pattern)?;

    // An empty pattern never attempts a match.
    if tokens.is_empty() {
        return Ok(match replacement {
            None => FindAllOutcome::Matches(Vec::new()),
            Some(_) => FindAllOutcome::Rewritten(text.to_string()),
        });
    }

    match replacement {
        None => {
            let mut all = Vec::new();
            let mut offset = 0usize;
            loop {
                // A pattern that admits zero-width matches (e.g. an optional
                // or plain wildcard hole) can match the empty slice at
                // `offset == text.len()` too; once the guard below pushes
                // `offset` past that, stop before slicing out of bounds.
                if offset > text.len() {
                    break;
                }
                let slice = &text[offset..];
                let Some((start, end, bindings)) = find_first_match(slice, &tokens) else {
                    break;
                };
                all.push(bindings);
                let mut next_offset = offset + end;
                if end == start {
                    // Zero-width-match guard: step forward by one char (not
                    // one byte) to stay on a UTF-8 boundary and avoid
                    // looping forever on a pattern that matches everywhere.
                    next_offset = advance_one_char(text, next_offset);
                }
                offset = next_offset;
            }
            Ok(FindAllOutcome::Matches(all))
        }
        Some(replacement) => {
            let mut result = text.to_string();
            let mut offset = 0usize;
            loop {
                if offset > result.len() {
                    break;
                }
                let slice = &result[offset..];
                let Some((start, end, bindings)) = find_first_match(slice, &tokens) else {
                    break;
                };
                let match_start = offset + start;
                let match_end = offset + end;
                let rendered = render_template(replacement, &bindings);
                let rendered_len = rendered.len();
                result.replace_range(match_start..match_end, &rendered);
                let mut next_offset = match_start + rendered_len;
                if match_end == match_start && rendered_len == 0 {
                    // Same zero-width-match guard as query mode: without it,
                    // a zero-width match that renders to an empty string
                    // never advances and this loops forever.
                    next_offset = advance_one_char(&result, next_offset);
                }
                offset = next_offset;
            }
            Ok(FindAllOutcome::Rewritten(result))
        }
    }
}

/// `find_first(text, pattern, replacement)`: only the first match. In query
/// mode returns its bindings (or an empty [`Bindings`] on no match). In
/// replace mode returns the text with at most one rewrite.
pub fn find_first(
    text: &str,
    pattern: &str,
    replacement: Option<&str>,
) -> Result<FindFirstOutcome, CompileError> {
    let tokens = compile(pattern)?;

    if tokens.is_empty() {
        return Ok(match replacement {
            None => FindFirstOutcome::Match(Bindings::new()),
            Some(_) => FindFirstOutcome::Rewritten(text.to_string()),
        });
    }

    match find_first_match(text, &tokens) {
        None => Ok(match replacement {
            None => FindFirstOutcome::Match(Bindings::new()),
            Some(_) => FindFirstOutcome::Rewritten(text.to_string()),
        }),
        Some((start, end, bindings)) => Ok(match replacement {
            None => FindFirstOutcome::Match(bindings),
            Some(replacement) => {
                let rendered = render_template(replacement, &bindings);
                let mut result = String::with_capacity(text.len());
                result.push_str(&text[..start]);
                result.push_str(&rendered);
                result.push_str(&text[end..]);
                FindFirstOutcome::Rewritten(result)
            }
        }),
    }
}

fn advance_one_char(text: &str, from: usize) -> usize {
    match text[from..].chars().next() {
        Some(c) => from + c.len_utf8(),
        None => from + 1,
    }
}
