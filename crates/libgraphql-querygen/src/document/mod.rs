mod argument;
mod directive;
mod document_error;
mod document_printer;
mod field_node;
pub mod fold;
mod opaque_node;
mod operation;
mod outline;
mod query_document;
mod selection_set;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use document_error::DocumentError;
pub use document_printer::DocumentPrinter;
pub use document_printer::DEFAULT_INDENT;
pub use field_node::FieldNode;
pub use fold::Folder;
pub use opaque_node::NodeKind;
pub use opaque_node::OpaqueNode;
pub use operation::Operation;
pub use outline::outline;
pub use outline::OutlineEntry;
pub use query_document::QueryDocument;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use value::Value;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
