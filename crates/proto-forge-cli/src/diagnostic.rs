use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::error::Category;

/// A diagnostic wrapping a tree decoding error for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct TreeDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `serde_json` decoding error into a `TreeDiagnostic` pointing at
/// the reported line and column.
pub fn decode_error_to_diagnostic(
    error: &serde_json::Error,
    source: &str,
    filename: &str,
) -> TreeDiagnostic {
    let offset = byte_offset(source, error.line(), error.column());
    let (label, suggestion) = match error.classify() {
        Category::Syntax => (
            "invalid JSON here",
            Some("Check for a missing comma, quote, or closing bracket."),
        ),
        Category::Data => (
            "does not match the tree model",
            Some(
                "Declarations need a \"kind\" of message, field, oneof, enum, method or \
                 service; field numbers start at 1; oneofs need at least one member.",
            ),
        ),
        Category::Eof => ("input ended here", Some("The document is truncated.")),
        Category::Io => ("read failed here", None),
    };

    TreeDiagnostic {
        src: NamedSource::new(filename, source.to_string()),
        span: (offset, 1).into(),
        message: strip_position(&error.to_string()),
        label: label.to_string(),
        suggestion: suggestion.map(str::to_string),
    }
}

/// Byte offset of a 1-based `line`/`column`, clamped to the last byte.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len().saturating_sub(1))
}

/// serde_json appends " at line L column C"; the span already shows it.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_for(text: &str) -> serde_json::Error {
        proto_forge_core::types::ProtoFile::from_json(text).unwrap_err()
    }

    #[test]
    fn byte_offset_first_line() {
        assert_eq!(byte_offset("abc", 1, 2), 1);
    }

    #[test]
    fn byte_offset_later_line() {
        let src = "ab\ncdef\ng";
        assert_eq!(byte_offset(src, 2, 3), 5);
        assert_eq!(&src[5..6], "e");
    }

    #[test]
    fn byte_offset_is_clamped() {
        assert_eq!(byte_offset("ab", 9, 9), 1);
        assert_eq!(byte_offset("", 1, 1), 0);
    }

    #[test]
    fn syntax_error_diagnostic() {
        let text = "{\n  \"package\": \"a\"\n  \"imports\": []\n}";
        let diag = decode_error_to_diagnostic(&error_for(text), text, "a.json");
        assert_eq!(diag.label, "invalid JSON here");
        assert!(!diag.message.contains(" at line "));
        assert!(diag.suggestion.is_some());
    }

    #[test]
    fn data_error_diagnostic() {
        let text = r#"{"declarations":[{"kind":"extend","name":"X"}]}"#;
        let diag = decode_error_to_diagnostic(&error_for(text), text, "b.json");
        assert_eq!(diag.label, "does not match the tree model");
        assert!(diag.message.contains("extend"), "{}", diag.message);
    }

    #[test]
    fn eof_error_diagnostic() {
        let text = "{\"package\": ";
        let diag = decode_error_to_diagnostic(&error_for(text), text, "c.json");
        assert_eq!(diag.label, "input ended here");
    }
}
