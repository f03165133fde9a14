use proto_forge_core::types::Reservation;

use crate::lines::LineStream;

/// Renders reserved numbers, then reserved names, then one blank line.
///
/// Each bucket keeps the relative order of its entries. Nothing is emitted for
/// an empty list.
pub fn render_reservations(reserved: &[Reservation]) -> LineStream<'_> {
    let (numbers, names): (Vec<&Reservation>, Vec<&Reservation>) =
        reserved.iter().partition(|r| r.is_numeric());

    let mut lines = Vec::with_capacity(3);
    if !numbers.is_empty() {
        lines.push(format!("reserved {};", join_entries(&numbers)));
    }
    if !names.is_empty() {
        lines.push(format!("reserved {};", join_entries(&names)));
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    Box::new(lines.into_iter())
}

fn join_entries(entries: &[&Reservation]) -> String {
    entries
        .iter()
        .map(|entry| format_entry(entry))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_entry(entry: &Reservation) -> String {
    match entry {
        Reservation::Number(n) => n.to_string(),
        Reservation::Range { start, end } => format!("{start} to {end}"),
        Reservation::Name(name) => format!("\"{name}\""),
    }
}
