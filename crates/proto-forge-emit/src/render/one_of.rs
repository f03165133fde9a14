use proto_forge_core::types::OneOf;

use super::render_declaration;
use crate::lines::{braced, flat_map, LineStream};

/// Oneofs always render as a block; they never have an empty form.
pub(super) fn render_one_of(one_of: &OneOf) -> LineStream<'_> {
    braced(
        format!("oneof {} {{", one_of.name),
        flat_map(&one_of.declarations, render_declaration),
    )
}
