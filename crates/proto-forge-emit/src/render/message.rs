use proto_forge_core::types::Message;

use super::reservation::render_reservations;
use super::render_declaration;
use crate::lines::{braced, flat_map, line, LineStream};

/// `message Name {}` when empty, otherwise a block holding reservations and
/// then members.
pub(super) fn render_message(message: &Message) -> LineStream<'_> {
    if message.is_empty() {
        return line(format!("message {} {{}}", message.name));
    }

    let body = render_reservations(&message.reserved)
        .chain(flat_map(&message.declarations, render_declaration));
    braced(format!("message {} {{", message.name), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::collect;
    use proto_forge_core::types::{Enum, Field, FieldNumber, Reservation, ScalarType};

    fn number(n: u32) -> FieldNumber {
        FieldNumber::new(n).unwrap()
    }

    #[test]
    fn empty_message_collapses() {
        let lines = collect(render_message(&Message::new("Foo")));
        assert_eq!(lines, vec!["message Foo {}"]);
    }

    #[test]
    fn single_field_block() {
        let m = Message::new("Foo").with_declaration(Field::new("id", ScalarType::Int32, number(1)));
        let lines = collect(render_message(&m));
        assert_eq!(lines, vec!["message Foo {", "  int32 id = 1;", "}"]);
    }

    #[test]
    fn reservations_precede_members() {
        let m = Message::new("Foo")
            .with_declaration(Field::new("id", ScalarType::Int32, number(1)))
            .with_reserved(Reservation::Number(2))
            .with_reserved(Reservation::name("legacy"));
        let lines = collect(render_message(&m));
        assert_eq!(
            lines,
            vec![
                "message Foo {",
                "  reserved 2;",
                "  reserved \"legacy\";",
                "",
                "  int32 id = 1;",
                "}",
            ]
        );
    }

    #[test]
    fn reservations_only_keep_block_form() {
        let m = Message::new("Tomb").with_reserved(Reservation::range(1, 3).unwrap());
        let lines = collect(render_message(&m));
        assert_eq!(lines, vec!["message Tomb {", "  reserved 1 to 3;", "", "}"]);
    }

    #[test]
    fn nested_declarations_indent_per_level() {
        let inner = Message::new("Inner")
            .with_declaration(Enum::new("Kind").with_variant("KIND_UNSPECIFIED", 0));
        let outer = Message::new("Outer")
            .with_declaration(inner)
            .with_declaration(Message::new("Empty"));
        let lines = collect(render_message(&outer));
        assert_eq!(
            lines,
            vec![
                "message Outer {",
                "  message Inner {",
                "    enum Kind {",
                "      KIND_UNSPECIFIED = 0;",
                "    }",
                "  }",
                "  message Empty {}",
                "}",
            ]
        );
    }
}
