//! # proto-forge-emit
//!
//! Renders a [`ProtoFile`](proto_forge_core::types::ProtoFile) tree into
//! canonical proto3 text.
//!
//! The emitter is a pure function of its input: no I/O, no shared state, and
//! identical trees always produce byte-identical text. Each renderer yields a
//! lazy [`LineStream`](lines::LineStream); indentation is applied one level per
//! nesting step by [`lines::indent`].
//!
//! # Example
//!
//! ```
//! use proto_forge_core::types::{Field, FieldNumber, Message, ProtoFile, ScalarType};
//! use proto_forge_emit::emit;
//!
//! let file = ProtoFile::new()
//!     .with_package("acme.v1")
//!     .with_declaration(
//!         Message::new("Ping")
//!             .with_declaration(Field::new("id", ScalarType::Int64, FieldNumber::new(1).unwrap())),
//!     );
//!
//! let text = emit(&file);
//! assert_eq!(
//!     text,
//!     "syntax = \"proto3\";\n\npackage acme.v1;\n\nmessage Ping {\n  int64 id = 1;\n}\n\n"
//! );
//! ```

pub mod emitter;
pub mod lines;
pub mod render;

pub use emitter::{emit, emit_declaration, SYNTAX_HEADER};
pub use render::render_declaration;
