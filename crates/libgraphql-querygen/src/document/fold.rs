//! A rewriting pass over [`QueryDocument`]s.
//!
//! Implementors of [`Folder`] override only the hooks they care about; every
//! default method delegates to the free function of the same name, which
//! rebuilds the node from its folded children. A folder never mutates its
//! input. It returns a new value.

use crate::document::Argument;
use crate::document::Directive;
use crate::document::FieldNode;
use crate::document::OpaqueNode;
use crate::document::Operation;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::document::VariableDefinition;

pub trait Folder: Sized {
    fn fold_document(&mut self, document: &QueryDocument) -> QueryDocument {
        fold_document(self, document)
    }

    /// The root operation's selection set is folded before its directives
    /// and variable definitions, so state gathered while visiting fields is
    /// available when the variable definitions are folded.
    fn fold_operation(&mut self, operation: &Operation) -> Operation {
        fold_operation(self, operation)
    }

    fn fold_variable_definition(
        &mut self,
        var_def: &VariableDefinition,
    ) -> VariableDefinition {
        var_def.clone()
    }

    /// `path` holds the response names of the fields enclosing this
    /// selection set; it is empty for the operation's root selection set.
    fn fold_selection_set(
        &mut self,
        selection_set: &SelectionSet,
        path: &[String],
    ) -> SelectionSet {
        fold_selection_set(self, selection_set, path)
    }

    /// Returning `None` removes the field from its parent selection set.
    fn fold_field(
        &mut self,
        field: &FieldNode,
        path: &[String],
    ) -> Option<FieldNode> {
        Some(fold_field(self, field, path))
    }

    fn fold_directive(&mut self, directive: &Directive) -> Directive {
        fold_directive(self, directive)
    }

    fn fold_argument(&mut self, argument: &Argument) -> Argument {
        argument.clone()
    }

    fn fold_unsupported(&mut self, node: &OpaqueNode) -> OpaqueNode {
        node.clone()
    }
}

pub fn fold_document<F: Folder>(
    folder: &mut F,
    document: &QueryDocument,
) -> QueryDocument {
    QueryDocument {
        auxiliary: document.auxiliary.clone(),
        operation: folder.fold_operation(&document.operation),
    }
}

pub fn fold_operation<F: Folder>(
    folder: &mut F,
    operation: &Operation,
) -> Operation {
    let selection_set = folder.fold_selection_set(&operation.selection_set, &[]);
    let directives = operation.directives.iter()
        .map(|directive| folder.fold_directive(directive))
        .collect();
    let variables = operation.variables.iter()
        .map(|var_def| folder.fold_variable_definition(var_def))
        .collect();

    Operation {
        directives,
        name: operation.name.clone(),
        selection_set,
        variables,
    }
}

pub fn fold_selection_set<F: Folder>(
    folder: &mut F,
    selection_set: &SelectionSet,
    path: &[String],
) -> SelectionSet {
    let items = selection_set.items.iter()
        .filter_map(|selection| match selection {
            Selection::Field(field) =>
                folder.fold_field(field, path).map(Selection::Field),

            Selection::Unsupported(node) =>
                Some(Selection::Unsupported(folder.fold_unsupported(node))),
        })
        .collect();

    SelectionSet { items }
}

/// Rebuild `field` from its folded arguments, directives and children.
pub fn fold_field<F: Folder>(
    folder: &mut F,
    field: &FieldNode,
    path: &[String],
) -> FieldNode {
    let arguments = field.arguments.iter()
        .map(|arg| folder.fold_argument(arg))
        .collect();
    let directives = field.directives.iter()
        .map(|directive| folder.fold_directive(directive))
        .collect();
    let selection_set = field.selection_set.as_ref().map(|selection_set| {
        let mut child_path = path.to_vec();
        child_path.push(field.response_name().to_string());
        folder.fold_selection_set(selection_set, &child_path)
    });

    FieldNode {
        alias: field.alias.clone(),
        arguments,
        directives,
        name: field.name.clone(),
        selection_set,
    }
}

pub fn fold_directive<F: Folder>(
    folder: &mut F,
    directive: &Directive,
) -> Directive {
    Directive {
        arguments: directive.arguments.iter()
            .map(|arg| folder.fold_argument(arg))
            .collect(),
        name: directive.name.clone(),
    }
}
