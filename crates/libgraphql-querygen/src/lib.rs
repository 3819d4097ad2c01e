//! Synthesize GraphQL queries from a schema, then edit them as structured
//! documents.
//!
//! The pieces fit together leaf-first:
//!
//! - [`schema::SchemaModel`] answers read-only questions about a parsed
//!   schema (root fields, fields of a type, return types).
//! - [`synthesis::QuerySynthesizer`] expands a chosen root field into a
//!   complete selection tree plus the variable definitions it needs.
//! - [`document::QueryDocument`] is the structured, immutable form of a query
//!   that can be parsed from and printed back to query text.
//! - [`transform::TransformEngine`] applies user edits (field selection,
//!   argument values, operation name) by producing new documents.

pub mod ast;
pub mod document;
mod file_reader;
pub mod loc;
pub mod schema;
pub mod synthesis;
pub mod transform;
pub mod types;

pub use file_reader::ReadContentError;
