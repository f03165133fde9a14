use std::iter;

use proto_forge_core::types::Enum;

use crate::lines::{flat_map, indent, LineStream, INDENT};

/// Always the first statement of an enum body, so its indent is fixed.
const ALLOW_ALIAS_LINE: &str = "  option allow_alias = true;";

pub(super) fn render_enum(enumeration: &Enum) -> LineStream<'_> {
    let mut preamble = Vec::new();
    if enumeration.allow_alias {
        preamble.push(ALLOW_ALIAS_LINE.to_string());
        if !enumeration.variants.is_empty() {
            preamble.push(String::new());
        }
    }

    let variants = flat_map(&enumeration.variants, |variant| {
        format!("{} = {};", variant.name, variant.number)
    });

    Box::new(
        iter::once(format!("enum {} {{", enumeration.name))
            .chain(preamble)
            .chain(indent(variants, INDENT))
            .chain(iter::once("}".to_string())),
    )
}
