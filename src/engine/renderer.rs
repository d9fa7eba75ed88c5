// Substitutes `:[name.op1.op2]` placeholders in a replacement string using
// a bindings map and a fixed operation table.
use std::path::Path;

use super::bindings::Bindings;
use super::scan::scan_brackets;

pub(crate) fn render_template(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0usize;

    for span in scan_brackets(template) {
        out.push_str(&template[cursor..span.start]);
        out.push_str(&render_placeholder(template, &span, bindings));
        cursor = span.end;
    }
    out.push_str(&template[cursor..]);
    out
}

fn render_placeholder(
    template: &str,
    span: &super::scan::BracketSpan<'_>,
    bindings: &Bindings,
) -> String {
    let verbatim = || template[span.start..span.end].to_string();

    let mut parts = span.content.split('.');
    let Some(name) = parts.next() else {
        return verbatim();
    };
    if name.is_empty() {
        return verbatim();
    }

    let Some(Some(captured)) = bindings.get(name) else {
        // Absent from bindings, or bound to `None` (a skipped optional
        // hole): leave the placeholder verbatim.
        return verbatim();
    };

    let mut value = captured.to_string();
    for op in parts {
        match apply_operation(op, &value) {
            Some(next) => value = next,
            None => return verbatim(),
        }
    }
    value
}

/// The fixed operation table. Returns `None` on an unknown
/// operation name or a failed application (e.g. `inc` on a non-numeric
/// capture) — both cases leave the whole placeholder untouched, never a
/// partial application.
fn apply_operation(op: &str, value: &str) -> Option<String> {
    match op {
        "upper" => Some(value.to_uppercase()),
        "lower" => Some(value.to_lowercase()),
        "capitalize" => Some(capitalize(value)),
        "strip" => Some(value.trim().to_string()),
        "inc" => value.parse::<i64>().ok().map(|n| (n + 1).to_string()),
        "dec" => value.parse::<i64>().ok().map(|n| (n - 1).to_string()),
        "filename" => Path::new(value)
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string()),
        "basename" => Path::new(value)
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string()),
        "extension" => Some(
            Path::new(value)
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string(),
        ),
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings_with(pairs: &[(&str, Option<&str>)]) -> Bindings {
        let mut b = Bindings::new();
        for (name, value) in pairs {
            b.set(*name, value.map(|s| s.to_string()));
        }
        b
    }

    #[test]
    fn unbound_placeholder_is_left_verbatim() {
        let b = bindings_with(&[]);
        assert_eq!(render_template(":[missing]", &b), ":[missing]");
    }

    #[test]
    fn optional_none_capture_is_left_verbatim() {
        let b = bindings_with(&[("ext", None)]);
        assert_eq!(render_template(":[ext.upper]", &b), ":[ext.upper]");
    }

    #[test]
    fn chained_operations_apply_left_to_right() {
        let b = bindings_with(&[("num", Some("99"))]);
        assert_eq!(render_template(":[num.inc]", &b), "100");
    }

    #[test]
    fn filename_then_plain_name() {
        let b = bindings_with(&[
            ("filepath", Some("/path/to/some_file.txt")),
            ("num", Some("99")),
        ]);
        let out = render_template(
            "File is :[filepath.filename], number is now :[num.inc]",
            &b,
        );
        assert_eq!(out, "File is some_file.txt, number is now 100");
    }

    #[test]
    fn unknown_operation_leaves_placeholder_verbatim() {
        let b = bindings_with(&[("num", Some("99"))]);
        assert_eq!(render_template(":[num.invalid_op]", &b), ":[num.invalid_op]");
    }

    #[test]
    fn upper_then_literal_context() {
        let b = bindings_with(&[("name", Some("John"))]);
        assert_eq!(render_template("NAME: :[name.upper]", &b), "NAME: JOHN");
    }

    #[test]
    fn basename_and_extension() {
        let b = bindings_with(&[("p", Some("/a/b/report.final.csv"))]);
        assert_eq!(render_template(":[p.basename]", &b), "report.final");
        assert_eq!(render_template(":[p.extension]", &b), "csv");
    }

    #[test]
    fn capitalize_lowercases_the_remainder() {
        let b = bindings_with(&[("name", Some("jOHN"))]);
        assert_eq!(render_template(":[name.capitalize]", &b), "John");
    }

    #[test]
    fn extension_of_a_path_with_no_extension_is_empty_not_verbatim() {
        let b = bindings_with(&[("p", Some("/a/b/noext"))]);
        assert_eq!(render_template(":[p.extension]", &b), "");
    }
}
