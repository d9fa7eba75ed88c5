// A backtracking matcher over the compiled token sequence, producing
// bindings and a matched span.
use super::bindings::Bindings;
use super::scanner::scan_balanced;
use super::token::{Hole, HoleKind, Token};

/// `find_first(text, tokens)`: iterate the anchor position from 0 up to and
/// including `text.len()` and try the whole token sequence at each anchor;
/// the first success wins. Anchors are only tried at UTF-8 char boundaries
/// so multi-byte characters are never split; behavior on ASCII input is
/// unaffected.
pub(crate) fn find_first_match(text: &str, tokens: &[Token]) -> Option<(usize, usize, Bindings)> {
    for anchor in 0..=text.len() {
        if !text.is_char_boundary(anchor) {
            continue;
        }
        if let Some((end, bindings)) = match_at(text, tokens, 0, anchor, Bindings::new()) {
            return Some((anchor, end, bindings));
        }
    }
    None
}

/// Recursive matcher. `ti` is the token index, `i` the text byte offset.
/// Every call either advances `ti` or advances `i` along the branch it
/// takes, or returns — termination follows directly.
fn match_at(
    text: &str,
    tokens: &[Token],
    ti: usize,
    i: usize,
    bindings: Bindings,
) -> Option<(usize, Bindings)> {
    let Some(token) = tokens.get(ti) else {
        return Some((i, bindings));
    };

    match token {
        Token::Literal { regex } => {
            let rest = &text[i..];
            let m = regex.find(rest)?;
            // `regex` is compiled with a leading `\A`, so any match it
            // returns necessarily starts at offset 0 of `rest`.
            debug_assert_eq!(m.start(), 0);
            match_at(text, tokens, ti + 1, i + m.end(), bindings)
        }
        Token::Hole(hole) => match_hole(text, tokens, ti, i, bindings, hole),
    }
}

fn match_hole(
    text: &str,
    tokens: &[Token],
    ti: usize,
    i: usize,
    bindings: Bindings,
    hole: &Hole,
) -> Option<(usize, Bindings)> {
    match &hole.kind {
        HoleKind::Structural(sm) => {
            if let Some((end, chunk)) = scan_balanced(text, i, sm.open, sm.close, sm.inner_only) {
                let mut next = bindings.clone();
                if let Some(name) = &hole.name {
                    next.set(name.clone(), Some(chunk));
                }
                if let Some(result) = match_at(text, tokens, ti + 1, end, next) {
                    return Some(result);
                }
            }
            try_optional_skip(text, tokens, ti, i, bindings, hole)
        }

        HoleKind::RegexMacro(_) | HoleKind::UserRegex(_) => {
            // Constrained holes enumerate candidate ends greedy-first —
            // longest substring down to one character — so `:[x:num]`
            // consumes as much of the numeric grammar as it can before the
            // rest of the pattern gets a turn.
            let mut end = text.len();
            while end > i {
                if text.is_char_boundary(end) {
                    let candidate = &text[i..end];
                    if hole_constraint_matches(hole, candidate) {
                        let mut next = bindings.clone();
                        if let Some(name) = &hole.name {
                            next.set(name.clone(), Some(candidate.to_string()));
                        }
                        if let Some(result) = match_at(text, tokens, ti + 1, end, next) {
                            return Some(result);
                        }
                    }
                }
                end -= 1;
            }
            try_optional_skip(text, tokens, ti, i, bindings, hole)
        }

        HoleKind::Wildcard => {
            // Plain wildcards default to non-greedy — shortest-first,
            // empty allowed — to avoid combinatorial blow-up on inputs with
            // many wildcards.
            let mut end = i;
            loop {
                if text.is_char_boundary(end) {
                    let candidate = &text[i..end];
                    let mut next = bindings.clone();
                    if let Some(name) = &hole.name {
                        next.set(name.clone(), Some(candidate.to_string()));
                    }
                    if let Some(result) = match_at(text, tokens, ti + 1, end, next) {
                        return Some(result);
                    }
                }
                if end >= text.len() {
                    break;
                }
                end += 1;
            }
            try_optional_skip(text, tokens, ti, i, bindings, hole)
        }
    }
}

fn hole_constraint_matches(hole: &Hole, candidate: &str) -> bool {
    match &hole.kind {
        HoleKind::RegexMacro(m) => m.regex().is_match(candidate),
        HoleKind::UserRegex(re) => re.is_match(candidate),
        _ => true,
    }
}

/// Optional holes that could not consume anything fall back to being
/// skipped entirely: recurse at the same text position with the remainder
/// of the tokens. Only reached when every consuming branch already failed.
fn try_optional_skip(
    text: &str,
    tokens: &[Token],
    ti: usize,
    i: usize,
    bindings: Bindings,
    hole: &Hole,
) -> Option<(usize, Bindings)> {
    if !hole.optional {
        return None;
    }
    let mut next = bindings;
    if let Some(name) = &hole.name {
        next.set_if_absent(name, None);
    }
    match_at(text, tokens, ti + 1, i, next)
}
