// Given an opening delimiter position, finds the matching close, skipping
// delimiters inside string literals and comments. The five-transition
// priority order here — string-escape, line-comment-exit, block-comment-
// exit, enter-comment/string, depth-count — targets the one hard-coded
// C-family lexer dialect this crate supports.

/// Scan a balanced `open`/`close` region starting at byte offset `start` in
/// `text` (`text[start..]` must begin with `open`). Returns the absolute
/// byte offset just past the matching close, plus the captured text — with
/// delimiters stripped if `inner_only` is set. Returns `None` on an
/// unterminated region or an unterminated string: never a position past
/// end-of-input without a matching close.
pub(crate) fn scan_balanced(
    text: &str,
    start: usize,
    open: char,
    close: char,
    inner_only: bool,
) -> Option<(usize, String)> {
    let rest = &text[start..];
    let chars: Vec<(usize, char)> = rest.char_indices().collect();
    if chars.is_empty() || chars[0].1 != open {
        return None;
    }

    let mut depth: i64 = 1;
    let mut in_string: Option<char> = None;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    let n = chars.len();
    let mut idx = 1usize;

    while idx < n {
        let (byte_pos, c) = chars[idx];
        let next_char = chars.get(idx + 1).map(|(_, c)| *c);

        if let Some(quote) = in_string {
            if c == '\\' {
                // A backslash consumes the next character unconditionally,
                // even a closing quote. If there is no next character, the
                // string (and therefore the whole scan) is unterminated.
                if idx + 1 >= n {
                    return None;
                }
                idx += 2;
                continue;
            }
            if c == quote {
                in_string = None;
            }
            idx += 1;
            continue;
        }

        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
            }
            idx += 1;
            continue;
        }

        if in_block_comment {
            if c == '*' && next_char == Some('/') {
                in_block_comment = false;
                idx += 2;
            } else {
                idx += 1;
            }
            continue;
        }

        if c == '/' && next_char == Some('/') {
            in_line_comment = true;
            idx += 2;
            continue;
        }
        if c == '/' && next_char == Some('*') {
            in_block_comment = true;
            idx += 2;
            continue;
        }
        if c == '"' || c == '\'' {
            in_string = Some(c);
            idx += 1;
            continue;
        }

        if c == open {
            depth += 1;
            idx += 1;
            continue;
        }
        if c == close {
            depth -= 1;
            if depth == 0 {
                let end_in_rest = byte_pos + c.len_utf8();
                let end_abs = start + end_in_rest;
                let full = &text[start..end_abs];
                let captured = if inner_only {
                    let open_len = open.len_utf8();
                    let close_len = close.len_utf8();
                    full[open_len..full.len() - close_len].to_string()
                } else {
                    full.to_string()
                };
                return Some((end_abs, captured));
            }
            idx += 1;
            continue;
        }

        idx += 1;
    }

    // Ran off the end with depth != 0, or still inside an unterminated
    // string/comment: failure.
    None
}
