use proto_forge_core::types::{Declaration, OptionValue, ProtoFile};

use crate::lines::collect;
use crate::render::render_declaration;

/// First line of every emitted file.
pub const SYNTAX_HEADER: &str = "syntax = \"proto3\";";

/// Emit a complete file: header, package, imports, options, then each
/// top-level declaration followed by one blank line.
///
/// The last declaration keeps its blank line, so such a file ends in `\n\n`.
/// Output is byte-identical for identical trees.
pub fn emit(file: &ProtoFile) -> String {
    tracing::debug!(
        package = file.package.as_deref().unwrap_or_default(),
        imports = file.imports.len(),
        options = file.options.len(),
        declarations = file.declarations.len(),
        "emitting proto file"
    );

    let mut lines = vec![SYNTAX_HEADER.to_string(), String::new()];

    if let Some(package) = &file.package {
        lines.push(format!("package {package};"));
        lines.push(String::new());
    }

    for import in &file.imports {
        lines.push(format!("import \"{import}\";"));
    }
    if !file.imports.is_empty() {
        lines.push(String::new());
    }

    for (name, value) in &file.options {
        lines.push(format!("option {name} = {};", format_option_value(value)));
    }
    if !file.options.is_empty() {
        lines.push(String::new());
    }

    for declaration in &file.declarations {
        lines.push(emit_declaration(declaration));
        lines.push(String::new());
    }

    let mut text = lines.join("\n");
    // The join leaves the last block's blank line without its terminator.
    if !file.declarations.is_empty() {
        text.push('\n');
    }
    text
}

/// Emit one declaration block with no trailing newline.
pub fn emit_declaration(declaration: &Declaration) -> String {
    tracing::trace!(
        kind = %declaration.kind(),
        name = declaration.name(),
        "emitting declaration"
    );
    collect(render_declaration(declaration)).join("\n")
}

/// Strings are quoted; every other value kind is written as-is.
fn format_option_value(value: &OptionValue) -> String {
    match value {
        OptionValue::String(s) => format!("\"{s}\""),
        OptionValue::Integer(i) => i.to_string(),
        OptionValue::Float(s) | OptionValue::Identifier(s) => s.clone(),
        OptionValue::Boolean(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_forge_core::types::{Enum, Field, FieldNumber, Message, ScalarType, Service};

    #[test]
    fn empty_file_is_header_only() {
        assert_eq!(emit(&ProtoFile::new()), "syntax = \"proto3\";\n");
    }

    #[test]
    fn package_statement() {
        let text = emit(&ProtoFile::new().with_package("acme.v1"));
        assert_eq!(text, "syntax = \"proto3\";\n\npackage acme.v1;\n");
    }

    #[test]
    fn imports_keep_order_and_duplicates() {
        let file = ProtoFile::new()
            .with_import("z.proto")
            .with_import("a.proto")
            .with_import("z.proto");
        assert_eq!(
            emit(&file),
            "syntax = \"proto3\";\n\nimport \"z.proto\";\nimport \"a.proto\";\nimport \"z.proto\";\n"
        );
    }

    #[test]
    fn option_values() {
        let file = ProtoFile::new()
            .with_option("java_package", "com.acme")
            .with_option("java_multiple_files", true)
            .with_option("retention", 3i64)
            .with_option("ratio", OptionValue::Float("0.25".into()))
            .with_option("optimize_for", OptionValue::Identifier("CODE_SIZE".into()));
        let text = emit(&file);
        assert_eq!(
            text,
            "syntax = \"proto3\";\n\n\
             option java_package = \"com.acme\";\n\
             option java_multiple_files = true;\n\
             option retention = 3;\n\
             option ratio = 0.25;\n\
             option optimize_for = CODE_SIZE;\n"
        );
    }

    #[test]
    fn declarations_are_separated_by_one_blank_line() {
        let file = ProtoFile::new()
            .with_declaration(Message::new("A"))
            .with_declaration(Enum::new("B").with_variant("B_UNSPECIFIED", 0))
            .with_declaration(Service::new("C"));
        assert_eq!(
            emit(&file),
            "syntax = \"proto3\";\n\n\
             message A {}\n\n\
             enum B {\n  B_UNSPECIFIED = 0;\n}\n\n\
             service C {}\n\n"
        );
    }

    #[test]
    fn full_ordering() {
        let file = ProtoFile::new()
            .with_package("p")
            .with_import("i.proto")
            .with_option("o", "v")
            .with_declaration(
                Message::new("M")
                    .with_declaration(Field::new("f", ScalarType::Bool, FieldNumber::new(1).unwrap())),
            );
        assert_eq!(
            emit(&file),
            "syntax = \"proto3\";\n\n\
             package p;\n\n\
             import \"i.proto\";\n\n\
             option o = \"v\";\n\n\
             message M {\n  bool f = 1;\n}\n\n"
        );
    }

    #[test]
    fn last_declaration_keeps_its_blank_line() {
        let file = ProtoFile::new()
            .with_declaration(Message::new("A"))
            .with_declaration(Message::new("B"));
        let text = emit(&file);
        assert!(text.ends_with("message A {}\n\nmessage B {}\n\n"), "got:\n{text}");
        assert!(!text.ends_with("\n\n\n"));
    }

    #[test]
    fn emit_declaration_has_no_trailing_newline() {
        let text = emit_declaration(&Message::new("Solo").into());
        assert_eq!(text, "message Solo {}");
    }
}
