// Parses a pattern string into an ordered `Vec<Token>`, or a `CompileError`.
use regex::Regex;

use super::error::CompileError;
use super::scan::scan_brackets;
use super::token::{HoleKind, RegexMacro, StructuralMacro, Token, compile_literal};

/// Replace `...` with `:[_]` and split the result into literal and hole
/// tokens. Empty input compiles to an empty token list — an empty pattern
/// is reserved by the driver to mean "no matches".
pub(crate) fn compile(pattern: &str) -> Result<Vec<Token>, CompileError> {
    let expanded = pattern.replace("...", ":[_]");

    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    for span in scan_brackets(&expanded) {
        if span.start > cursor {
            tokens.push(compile_literal(&expanded[cursor..span.start]));
        }
        tokens.push(compile_hole(span.content)?);
        cursor = span.end;
    }
    if cursor < expanded.len() {
        tokens.push(compile_literal(&expanded[cursor..]));
    }

    Ok(tokens)
}

/// Parse the inside of a single `:[content]` hole. Tie-breaking between `~`
/// and `:` goes to whichever occurs first in the hole body; a name that is
/// empty or `_` normalizes to anonymous.
fn compile_hole(content: &str) -> Result<Token, CompileError> {
    let optional = content.ends_with('?');
    let body = if optional {
        &content[..content.len() - 1]
    } else {
        content
    };

    let tilde_pos = body.find('~');
    let colon_pos = body.find(':');

    let hole = match (tilde_pos, colon_pos) {
        (Some(t), colon) if colon.is_none_or(|c| t < c) => {
            let name = normalize_name(&body[..t]);
            let pattern = &body[t + 1..];
            let anchored = format!(r"\A(?:{})\z", pattern);
            let regex = Regex::new(&anchored).map_err(|e| CompileError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            super::token::Hole {
                name,
                kind: HoleKind::UserRegex(regex),
                optional,
            }
        }
        (_, Some(c)) => {
            let name = normalize_name(&body[..c]);
            let macro_name = body[c + 1..].trim();
            let kind = classify_macro(macro_name)?;
            super::token::Hole {
                name,
                kind,
                optional,
            }
        }
        _ => {
            let name = normalize_name(body);
            super::token::Hole {
                name,
                kind: HoleKind::Wildcard,
                optional,
            }
        }
    };

    Ok(Token::Hole(hole))
}

fn classify_macro(name: &str) -> Result<HoleKind, CompileError> {
    if let Some(m) = RegexMacro::lookup(name) {
        return Ok(HoleKind::RegexMacro(m));
    }
    if let Some(m) = StructuralMacro::lookup(name) {
        return Ok(HoleKind::Structural(m));
    }
    Err(CompileError::UnknownMacro {
        name: name.to_string(),
    })
}

fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "_" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::HoleKind;

    fn holes(tokens: &[Token]) -> Vec<&super::super::token::Hole> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Hole(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_pattern_compiles_to_no_tokens() {
        let tokens = compile("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn dots_sugar_expands_to_anonymous_wildcard() {
        let tokens = compile("a...b").unwrap();
        let hs = holes(&tokens);
        assert_eq!(hs.len(), 1);
        assert!(hs[0].name.is_none());
        assert!(matches!(hs[0].kind, HoleKind::Wildcard));
    }

    #[test]
    fn named_macro_hole() {
        let tokens = compile(":[age:digit]").unwrap();
        let hs = holes(&tokens);
        assert_eq!(hs[0].name.as_deref(), Some("age"));
        assert!(matches!(hs[0].kind, HoleKind::RegexMacro(RegexMacro::Digit)));
    }

    #[test]
    fn anonymous_macro_hole() {
        let tokens = compile(":[:digit]").unwrap();
        let hs = holes(&tokens);
        assert!(hs[0].name.is_none());
    }

    #[test]
    fn optional_flag_is_consumed() {
        let tokens = compile(":[ext:word?]").unwrap();
        let hs = holes(&tokens);
        assert!(hs[0].optional);
        assert_eq!(hs[0].name.as_deref(), Some("ext"));
    }

    #[test]
    fn user_regex_hole() {
        let tokens = compile(":[rest~.*]").unwrap();
        let hs = holes(&tokens);
        assert_eq!(hs[0].name.as_deref(), Some("rest"));
        assert!(matches!(hs[0].kind, HoleKind::UserRegex(_)));
    }

    #[test]
    fn unknown_macro_is_a_compile_error() {
        let err = compile(":[x:unknown_macro]").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownMacro {
                name: "unknown_macro".to_string()
            }
        );
    }

    #[test]
    fn invalid_regex_is_a_compile_error() {
        let err = compile(":[x~[invalid]").unwrap_err();
        assert!(matches!(err, CompileError::InvalidRegex { .. }));
    }

    #[test]
    fn structural_macro_hole() {
        let tokens = compile(":[term:()]").unwrap();
        let hs = holes(&tokens);
        assert!(matches!(hs[0].kind, HoleKind::Structural(_)));
    }
}
