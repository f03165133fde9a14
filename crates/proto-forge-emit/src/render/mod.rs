//! Per-kind renderers and the dispatcher that routes declarations to them.

mod enumeration;
mod field;
mod message;
mod one_of;
mod reservation;
mod service;

use proto_forge_core::types::Declaration;

use crate::lines::LineStream;

pub use field::{render_field, render_type};
pub use reservation::render_reservations;
pub use service::render_method_line;

/// Renders any declaration as a lazy stream of lines.
///
/// The match is total over [`Declaration`]; there is no fallback arm.
pub fn render_declaration(declaration: &Declaration) -> LineStream<'_> {
    match declaration {
        Declaration::Message(message) => message::render_message(message),
        Declaration::Field(field) => field::render_field_stream(field),
        Declaration::OneOf(one_of) => one_of::render_one_of(one_of),
        Declaration::Enum(enumeration) => enumeration::render_enum(enumeration),
        Declaration::Method(method) => service::render_method(method),
        Declaration::Service(service) => service::render_service(service),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::collect;
    use proto_forge_core::types::{
        Enum, Field, FieldNumber, Message, Method, OneOf, ScalarType, Service, Streaming,
    };

    fn field(name: &str, n: u32) -> Field {
        Field::new(name, ScalarType::String, FieldNumber::new(n).unwrap())
    }

    fn brace_depth(lines: &[String]) -> i64 {
        let mut depth = 0i64;
        for line in lines {
            for c in line.chars() {
                match c {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                assert!(depth >= 0, "closing brace before opening in {lines:?}");
            }
        }
        depth
    }

    #[test]
    fn every_kind_renders_balanced_output() {
        let cases: Vec<(&str, Declaration)> = vec![
            ("message", Message::new("M").with_declaration(field("a", 1)).into()),
            ("field", field("a", 1).into()),
            (
                "oneof",
                OneOf::new("pick", vec![field("a", 1).into()]).unwrap().into(),
            ),
            ("enum", Enum::new("E").with_variant("E_UNSPECIFIED", 0).into()),
            (
                "method",
                Method::new("Call", "Req", "Res")
                    .streaming(Streaming::INPUT)
                    .into(),
            ),
            (
                "service",
                Service::new("Svc")
                    .with_method(Method::new("Call", "Req", "Res"))
                    .into(),
            ),
        ];

        for (kind, declaration) in &cases {
            assert_eq!(declaration.kind().to_string(), *kind);
            let lines = collect(render_declaration(declaration));
            assert!(!lines.is_empty(), "{kind} rendered nothing");
            assert!(lines.iter().all(|l| !l.contains('\n')), "{kind}: {lines:?}");
            assert_eq!(brace_depth(&lines), 0, "{kind} unbalanced: {lines:?}");
        }
    }

    #[test]
    fn dispatch_reaches_field_renderer() {
        let lines = collect(render_declaration(&field("title", 3).into()));
        assert_eq!(lines, vec!["string title = 3;"]);
    }
}
