//! # proto-forge-core
//!
//! The tree model handed to the proto-forge emitter: files, declarations,
//! field types, reservations and streaming modes.
//!
//! Every type here is plain data. Upstream stages resolve names, allocate
//! field numbers and validate semantics before building a tree; the only
//! checks performed in this crate are the structural ones a constructor can
//! enforce cheaply (positive field numbers, ordered ranges, non-empty oneofs).

pub mod error;
pub mod types;

pub use error::ProtoError;
