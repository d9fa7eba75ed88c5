// --- 1. Bring the public API of this crate's library target into scope ---
// `structmatch` is this crate's own `[lib]` target (see `src/lib.rs`); the
// binary links against it exactly the way an external consumer would.
use structmatch::{CompileError, FindAllOutcome, FindFirstOutcome, find_all, find_first};

// Import from the standard library (`std`):
// `env` for command-line arguments, `fs`/`io` for reading files and stdin,
// and `process::exit` for setting the program's exit code.
use std::{
    env, fs,
    io::{self, Read, Write},
};

/// Parsed command-line invocation (SPEC_FULL.md §6.3, "CLI contract").
struct Args {
    pattern: Option<String>,
    replacement: Option<String>,
    input_file: Option<String>,
    pattern_file: Option<String>,
    replacement_file: Option<String>,
    first: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut positionals: Vec<String> = Vec::new();
    let mut input_file = None;
    let mut pattern_file = None;
    let mut replacement_file = None;
    let mut first = false;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-i" | "--input" => {
                input_file = Some(take_value(&mut iter, arg)?);
            }
            "-p" | "--pattern-file" => {
                pattern_file = Some(take_value(&mut iter, arg)?);
            }
            "-r" | "--replacement-file" => {
                replacement_file = Some(take_value(&mut iter, arg)?);
            }
            "--first" => {
                first = true;
            }
            other => positionals.push(other.to_string()),
        }
    }

    let mut positionals = positionals.into_iter();
    let pattern = positionals.next();
    let replacement = positionals.next();

    if pattern.is_none() && pattern_file.is_none() {
        return Err("PATTERN is required (provide as argument or via -p)".to_string());
    }

    Ok(Args {
        pattern,
        replacement,
        input_file,
        pattern_file,
        replacement_file,
        first,
    })
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// Read input from a file, or from stdin when no file (or `-`) is given.
fn read_input(input_file: Option<&str>) -> io::Result<String> {
    match input_file {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path),
    }
}

/// Read from `file_path` if given, otherwise fall back to `inline`.
fn read_file_or_inline(
    file_path: Option<&str>,
    inline: Option<String>,
) -> io::Result<Option<String>> {
    match file_path {
        Some(path) => fs::read_to_string(path).map(Some),
        None => Ok(inline),
    }
}

fn main() {
    let raw_args: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&raw_args) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            std::process::exit(2);
        }
    };

    let input_text = match read_input(args.input_file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(2);
        }
    };

    let pattern = match read_file_or_inline(args.pattern_file.as_deref(), args.pattern) {
        Ok(Some(p)) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("Error: Pattern is empty");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error reading pattern file: {}", e);
            std::process::exit(2);
        }
    };

    let replacement = match read_file_or_inline(args.replacement_file.as_deref(), args.replacement)
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading replacement file: {}", e);
            std::process::exit(2);
        }
    };

    std::process::exit(run(&input_text, &pattern, replacement.as_deref(), args.first));
}

/// Runs the engine and writes its output; returns the process exit code.
fn run(input_text: &str, pattern: &str, replacement: Option<&str>, first: bool) -> i32 {
    if first {
        match find_first(input_text, pattern, replacement) {
            Ok(FindFirstOutcome::Match(bindings)) => {
                if bindings.is_empty() {
                    1
                } else {
                    println!("{}", serde_json::to_string(&bindings).unwrap());
                    0
                }
            }
            Ok(FindFirstOutcome::Rewritten(text)) => {
                let changed = text != input_text;
                let _ = io::stdout().write_all(text.as_bytes());
                if changed { 0 } else { 1 }
            }
            Err(e) => report_compile_error(&e),
        }
    } else {
        match find_all(input_text, pattern, replacement) {
            Ok(FindAllOutcome::Matches(all)) => {
                if all.is_empty() {
                    1
                } else {
                    let lines: Vec<String> = all
                        .iter()
                        .map(|b| serde_json::to_string(b).unwrap())
                        .collect();
                    println!("{}", lines.join("\n"));
                    0
                }
            }
            Ok(FindAllOutcome::Rewritten(text)) => {
                let changed = text != input_text;
                let _ = io::stdout().write_all(text.as_bytes());
                if changed { 0 } else { 1 }
            }
            Err(e) => report_compile_error(&e),
        }
    }
}

fn report_compile_error(e: &CompileError) -> i32 {
    eprintln!("Error: {}", e);
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_pattern_and_replacement() {
        let args = parse_args(&["pat".to_string(), "rep".to_string()]).unwrap();
        assert_eq!(args.pattern.as_deref(), Some("pat"));
        assert_eq!(args.replacement.as_deref(), Some("rep"));
        assert!(!args.first);
    }

    #[test]
    fn parses_flags() {
        let raw: Vec<String> = vec![
            "-i".into(),
            "file.txt".into(),
            "--first".into(),
            "pat".into(),
        ];
        let args = parse_args(&raw).unwrap();
        assert_eq!(args.input_file.as_deref(), Some("file.txt"));
        assert!(args.first);
        assert_eq!(args.pattern.as_deref(), Some("pat"));
    }

    #[test]
    fn missing_pattern_is_an_error() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn pattern_file_flag_satisfies_requirement_without_positional() {
        let raw: Vec<String> = vec!["-p".into(), "pattern.txt".into()];
        let args = parse_args(&raw).unwrap();
        assert!(args.pattern.is_none());
        assert_eq!(args.pattern_file.as_deref(), Some("pattern.txt"));
    }

    #[test]
    fn run_query_mode_exit_code_reflects_matches() {
        let code = run("John is 30.", ":[name:word] is :[age:digit]", None, false);
        assert_eq!(code, 0);
        let code = run("nothing here", ":[name:word] is :[age:digit]", None, false);
        assert_eq!(code, 1);
    }

    #[test]
    fn run_reports_compile_errors_with_exit_code_two() {
        let code = run("abc", ":[x:bogus_macro]", None, false);
        assert_eq!(code, 2);
    }
}
