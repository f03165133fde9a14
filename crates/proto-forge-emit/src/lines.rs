//! Line-stream helpers shared by every renderer.
//!
//! Renderers never build multi-line strings. They return a [`LineStream`] and
//! compose child streams with [`flat_map`] and [`indent`]; strings are only
//! produced at join points via [`collect`].

use std::iter;

/// Width of one nesting level.
pub const INDENT: usize = 2;

/// A lazily produced sequence of output lines. No line contains `\n`.
pub type LineStream<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// What a single input item expands to inside [`flat_map`].
pub enum Expansion<'a> {
    Line(String),
    Lines(LineStream<'a>),
}

impl<'a> Expansion<'a> {
    fn into_stream(self) -> LineStream<'a> {
        match self {
            Self::Line(line) => Box::new(iter::once(line)),
            Self::Lines(lines) => lines,
        }
    }
}

impl From<String> for Expansion<'_> {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl<'a> From<LineStream<'a>> for Expansion<'a> {
    fn from(lines: LineStream<'a>) -> Self {
        Self::Lines(lines)
    }
}

/// A stream holding exactly one line.
pub fn line<'a>(text: impl Into<String>) -> LineStream<'a> {
    Box::new(iter::once(text.into()))
}

/// Prefixes every non-empty line with `spaces` spaces.
///
/// Empty lines pass through untouched so blank separators never pick up
/// trailing whitespace, however deep the nesting.
pub fn indent<'a, I>(lines: I, spaces: usize) -> LineStream<'a>
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    let pad = " ".repeat(spaces);
    Box::new(lines.into_iter().map(move |line| {
        if line.is_empty() {
            line
        } else {
            format!("{pad}{line}")
        }
    }))
}

/// Maps each item to one line or a nested stream and flattens the result,
/// preserving input order and the order within each expansion.
pub fn flat_map<'a, I, E, F>(items: I, mut f: F) -> LineStream<'a>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    E: Into<Expansion<'a>>,
    F: FnMut(I::Item) -> E + 'a,
{
    Box::new(items.into_iter().flat_map(move |item| {
        let expansion: Expansion<'a> = f(item).into();
        expansion.into_stream()
    }))
}

/// Materializes a stream into an ordered list.
pub fn collect<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().collect()
}

/// `open`, then `body` indented one level, then a closing `}` line.
pub fn braced<'a, I>(open: String, body: I) -> LineStream<'a>
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    Box::new(
        iter::once(open)
            .chain(indent(body, INDENT))
            .chain(iter::once("}".to_string())),
    )
}
