use crate::document::Folder;
use crate::document::Operation;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::document::Value;
use crate::transform::argument_rewriter::ArgumentRewriter;
use crate::transform::selection_pruner::SelectionPruner;
use crate::transform::value_coercion;
use crate::transform::EmptySelectionPolicy;
use crate::transform::TransformError;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, TransformError>;

/// Applies user edits to [`QueryDocument`]s.
///
/// Every operation borrows the input document and returns a new one; the
/// engine holds no state between calls, so callers own (and sequence) the
/// "current" document themselves.
///
/// ```
/// use libgraphql_querygen::document::QueryDocument;
/// use libgraphql_querygen::document::Value;
/// use libgraphql_querygen::transform::TransformEngine;
///
/// let doc = QueryDocument::parse(
///     "query($id: ID!) { user(id: $id) { id name } }",
/// ).unwrap();
///
/// let engine = TransformEngine::new();
/// let doc = engine.apply_selection(&doc, ["id"]);
/// let doc = engine.apply_argument(&doc, "id", Value::from("abc")).unwrap();
///
/// assert_eq!(
///     doc.to_string(),
///     "query($id: ID! = \"abc\") {\n  user(id: $id) {\n    id\n  }\n}\n",
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransformEngine {
    empty_selection_policy: EmptySelectionPolicy,
}
impl TransformEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_selection_policy(mut self, policy: EmptySelectionPolicy) -> Self {
        self.empty_selection_policy = policy;
        self
    }

    pub fn empty_selection_policy(&self) -> EmptySelectionPolicy {
        self.empty_selection_policy
    }

    /// Set `argument_name` to `new_value` everywhere it appears (field and
    /// directive arguments alike).
    ///
    /// Arguments bound to a variable keep the variable reference and the
    /// variable's definition receives `new_value` as its default. Literal
    /// arguments are replaced in place, with `new_value` converted to the
    /// kind of the literal it replaces (so `"2"` replacing `page: 1` gives
    /// `page: 2`); a value that cannot be converted is a
    /// [`TransformError::ValueCoercion`].
    ///
    /// A `new_value` that references a variable rebinds each argument to it.
    /// Definitions nothing refers to afterwards are dropped; when the
    /// operation does not define the new variable, the first of them is
    /// renamed to it instead. With no definition to rename, the edit fails
    /// with [`TransformError::UndefinedVariable`].
    ///
    /// A document that never mentions `argument_name` is returned unchanged.
    /// Applying the same edit twice gives the same document as applying it
    /// once.
    pub fn apply_argument(
        &self,
        document: &QueryDocument,
        argument_name: &str,
        new_value: Value,
    ) -> Result<QueryDocument> {
        let mut rewriter = ArgumentRewriter::new(argument_name, &new_value);
        let rewritten = rewriter.fold_document(document);
        if let Some(err) = rewriter.error.take() {
            return Err(err);
        }
        if rewriter.rewrites == 0 {
            log::debug!("No `{argument_name}` argument to rewrite.");
            return Ok(document.clone());
        }

        log::debug!(
            "Set {} `{argument_name}` argument(s) to {new_value}.",
            rewriter.rewrites,
        );
        Ok(rewritten)
    }

    /// Like [`TransformEngine::apply_argument`], but starting from raw user
    /// text.
    ///
    /// The text is coerced using the first occurrence of the argument: the
    /// declared type of the variable it is bound to, or else the kind of the
    /// literal it currently holds.
    pub fn apply_argument_text(
        &self,
        document: &QueryDocument,
        argument_name: &str,
        raw: &str,
    ) -> Result<QueryDocument> {
        let operation = document.operation();
        let Some(current_value) = find_argument(operation, argument_name) else {
            log::debug!("No `{argument_name}` argument to rewrite.");
            return Ok(document.clone());
        };

        let new_value = match current_value.as_variable_name() {
            Some(var_name) => match operation.variable(var_name) {
                Some(var_def) => value_coercion::coerce_to_type(
                    argument_name,
                    raw,
                    var_def.type_annotation(),
                )?,

                // A reference to an undeclared variable gives no type to
                // coerce against.
                None => value_coercion::parse_value_literal(raw)
                    .unwrap_or_else(|| Value::String(raw.to_string())),
            },

            None => value_coercion::coerce_like(argument_name, raw, current_value)?,
        };

        self.apply_argument(document, argument_name, new_value)
    }

    /// Keep only fields whose name is in `selected_field_names`, plus the
    /// anchor fields directly under the operation (which are never removed).
    /// Unsupported selections (fragment spreads, inline fragments) are kept
    /// untouched.
    pub fn apply_selection<S: Into<String>>(
        &self,
        document: &QueryDocument,
        selected_field_names: impl IntoIterator<Item = S>,
    ) -> QueryDocument {
        let selected = selected_field_names.into_iter()
            .map(Into::into)
            .collect::<HashSet<String>>();
        self.prune(document, &selected, None)
    }

    /// Like [`TransformEngine::apply_selection`], but only the direct
    /// children of the field at `path` (response names starting from an
    /// anchor field) are candidates for removal.
    pub fn apply_selection_at<S: Into<String>>(
        &self,
        document: &QueryDocument,
        path: &[String],
        selected_field_names: impl IntoIterator<Item = S>,
    ) -> Result<QueryDocument> {
        if !has_children_at(document.operation().selection_set(), path) {
            return Err(TransformError::UnknownSelectionPath {
                path: path.join("."),
            });
        }

        let selected = selected_field_names.into_iter()
            .map(Into::into)
            .collect::<HashSet<String>>();
        Ok(self.prune(document, &selected, Some(path)))
    }

    /// Parse query text, reporting failures as
    /// [`TransformError::InvalidDocument`].
    pub fn parse_document(&self, query_src: &str) -> Result<QueryDocument> {
        Ok(QueryDocument::parse(query_src)?)
    }

    /// Set (or with `None`, clear) the root operation's name.
    pub fn rename_operation(
        &self,
        document: &QueryDocument,
        name: Option<&str>,
    ) -> Result<QueryDocument> {
        if let Some(invalid_name) = name.filter(|name| !value_coercion::is_valid_name(name)) {
            return Err(TransformError::InvalidOperationName {
                name: invalid_name.to_string(),
            });
        }

        log::debug!("Renaming operation to {name:?}.");
        let operation = document.operation().clone()
            .with_name(name.map(str::to_string));
        Ok(document.with_operation(operation))
    }

    fn prune(
        &self,
        document: &QueryDocument,
        selected: &HashSet<String>,
        scope: Option<&[String]>,
    ) -> QueryDocument {
        let mut pruner = SelectionPruner::new(
            self.empty_selection_policy,
            selected,
            scope,
        );
        let pruned = pruner.fold_document(document);
        log::debug!("Pruned {} field(s).", pruner.pruned);
        pruned
    }
}

/// The value of the first argument named `argument_name` in document order,
/// looking at operation directives, then fields and their directives.
fn find_argument<'doc>(
    operation: &'doc Operation,
    argument_name: &str,
) -> Option<&'doc Value> {
    let from_operation = operation.directives().iter()
        .flat_map(|directive| directive.arguments())
        .find(|arg| arg.name() == argument_name);
    if let Some(arg) = from_operation {
        return Some(arg.value());
    }

    let mut stack = operation.selection_set().items().iter().rev().collect::<Vec<_>>();
    while let Some(selection) = stack.pop() {
        let Selection::Field(field) = selection else {
            continue;
        };

        let found = field.arguments().iter()
            .chain(field.directives().iter().flat_map(|directive| directive.arguments()))
            .find(|arg| arg.name() == argument_name);
        if let Some(arg) = found {
            return Some(arg.value());
        }

        if let Some(selection_set) = field.selection_set() {
            stack.extend(selection_set.items().iter().rev());
        }
    }
    None
}

fn has_children_at(root: &SelectionSet, path: &[String]) -> bool {
    if path.is_empty() {
        return false;
    }

    let mut selection_set = root;
    for response_name in path {
        let Some(next) = selection_set.field(response_name)
            .and_then(|field| field.selection_set()) else {
            return false;
        };
        selection_set = next;
    }
    !selection_set.is_empty()
}
