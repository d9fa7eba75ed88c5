// Data model for compiled patterns. A compiled pattern is just `Vec<Token>`:
// literals interleaved with holes, in source order. Tokens are immutable
// once built — nothing here is ever mutated after `compiler::compile`
// returns.
use lazy_static::lazy_static;
use regex::Regex;

// The three built-in regex macros are fixed and global, so they are
// compiled once rather than recompiled on every candidate a constrained
// hole tries during backtracking.
lazy_static! {
    static ref DIGIT_RE: Regex = Regex::new(r"\A\d+\z").unwrap();
    static ref WORD_RE: Regex = Regex::new(r"\A\w+\z").unwrap();
    static ref NUM_RE: Regex =
        Regex::new(r"\A[-+]?[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?\z").unwrap();
}

/// A built-in regex macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegexMacro {
    Digit,
    Word,
    Num,
}

impl RegexMacro {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "digit" => Some(RegexMacro::Digit),
            "word" => Some(RegexMacro::Word),
            "num" => Some(RegexMacro::Num),
            _ => None,
        }
    }

    /// The precompiled, fully-anchored (`\A...\z`) matcher used to test a
    /// candidate substring for a full match.
    pub(crate) fn regex(self) -> &'static Regex {
        match self {
            RegexMacro::Digit => &DIGIT_RE,
            RegexMacro::Word => &WORD_RE,
            RegexMacro::Num => &NUM_RE,
        }
    }
}

/// A structural (balanced-delimiter) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StructuralMacro {
    pub open: char,
    pub close: char,
    pub inner_only: bool,
}

impl StructuralMacro {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "()" => Some(StructuralMacro {
                open: '(',
                close: ')',
                inner_only: false,
            }),
            "[]" => Some(StructuralMacro {
                open: '[',
                close: ']',
                inner_only: false,
            }),
            "{}" => Some(StructuralMacro {
                open: '{',
                close: '}',
                inner_only: false,
            }),
            "(_)" => Some(StructuralMacro {
                open: '(',
                close: ')',
                inner_only: true,
            }),
            "[_]" => Some(StructuralMacro {
                open: '[',
                close: ']',
                inner_only: true,
            }),
            "{_}" => Some(StructuralMacro {
                open: '{',
                close: '}',
                inner_only: true,
            }),
            _ => None,
        }
    }
}

/// What a `Hole` is constrained by.
#[derive(Debug, Clone)]
pub(crate) enum HoleKind {
    Wildcard,
    RegexMacro(RegexMacro),
    Structural(StructuralMacro),
    /// `~<pattern>` holes carry their own compiled, anchored regex.
    UserRegex(Regex),
}

#[derive(Debug, Clone)]
pub(crate) struct Hole {
    pub name: Option<String>,
    pub kind: HoleKind,
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum Token {
    Literal { regex: Regex },
    Hole(Hole),
}

/// Compile a literal run of pattern text into a matcher. Runs of ASCII
/// spaces become `\s*` (zero-or-more whitespace); every other character is
/// matched literally via `regex::escape`.
pub(crate) fn compile_literal(text: &str) -> Token {
    let mut escaped = String::from(r"\A");
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            // Collapse a run of spaces into a single `\s*`.
            while chars.peek() == Some(&' ') {
                chars.next();
            }
            escaped.push_str(r"\s*");
        } else {
            escaped.push_str(&regex::escape(&c.to_string()));
        }
    }
    let regex = Regex::new(&escaped).expect("escaped literal regex is valid");
    Token::Literal { regex }
}
