use std::borrow::Cow;

use proto_forge_core::types::{Field, FieldType, MapKey};

use crate::lines::{line, LineStream};

/// `[repeated ]<type> <name> = <number>;`
pub fn render_field(field: &Field) -> String {
    let label = if field.repeated { "repeated " } else { "" };
    format!(
        "{label}{} {} = {};",
        render_type(&field.field_type),
        field.name,
        field.number
    )
}

pub(super) fn render_field_stream(field: &Field) -> LineStream<'_> {
    line(render_field(field))
}

/// Scalars print their keyword, references print verbatim, maps recurse into
/// their value type.
pub fn render_type(field_type: &FieldType) -> Cow<'_, str> {
    match field_type {
        FieldType::Scalar(scalar) => Cow::Borrowed(scalar.as_str()),
        FieldType::Named(reference) => Cow::Borrowed(reference),
        FieldType::Map { key, value } => {
            Cow::Owned(format!("map<{}, {}>", render_map_key(key), render_type(value)))
        }
    }
}

fn render_map_key(key: &MapKey) -> &str {
    match key {
        MapKey::Scalar(scalar) => scalar.as_str(),
        MapKey::Named(reference) => reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_forge_core::types::{FieldNumber, ScalarType};

    fn number(n: u32) -> FieldNumber {
        FieldNumber::new(n).unwrap()
    }

    #[test]
    fn singular_scalar_field() {
        let f = Field::new("name", ScalarType::String, number(1));
        assert_eq!(render_field(&f), "string name = 1;");
    }

    #[test]
    fn repeated_field_has_label() {
        let f = Field::new("ids", ScalarType::Uint64, number(2)).repeated();
        assert_eq!(render_field(&f), "repeated uint64 ids = 2;");
    }

    #[test]
    fn named_reference_is_verbatim() {
        let f = Field::new("created_at", FieldType::named(".google.protobuf.Timestamp"), number(9));
        assert_eq!(render_field(&f), ".google.protobuf.Timestamp created_at = 9;");
    }

    #[test]
    fn map_type() {
        let t = FieldType::map(ScalarType::String.into(), ScalarType::Int32.into());
        assert_eq!(render_type(&t), "map<string, int32>");
    }

    #[test]
    fn map_with_named_key_and_value() {
        let t = FieldType::map(MapKey::named("Code"), FieldType::named("acme.Detail"));
        assert_eq!(render_type(&t), "map<Code, acme.Detail>");
    }

    #[test]
    fn nested_map_value_recurses() {
        let t = FieldType::map(
            ScalarType::String.into(),
            FieldType::map(ScalarType::Int64.into(), FieldType::named("Leaf")),
        );
        assert_eq!(render_type(&t), "map<string, map<int64, Leaf>>");
    }
}
