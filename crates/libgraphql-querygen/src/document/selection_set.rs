use crate::ast;
use crate::document::FieldNode;
use crate::document::OpaqueNode;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(FieldNode),

    /// A selection kind this model does not interpret (an inline fragment or
    /// a fragment spread). It is preserved verbatim.
    Unsupported(OpaqueNode),
}
impl Selection {
    pub(crate) fn from_ast(ast_selection: &ast::operation::Selection) -> Self {
        match ast_selection {
            ast::operation::Selection::Field(ast_field) =>
                Selection::Field(FieldNode::from_ast(ast_field)),

            ast::operation::Selection::FragmentSpread(spread) =>
                Selection::Unsupported(OpaqueNode::from_ast_fragment_spread(spread)),

            ast::operation::Selection::InlineFragment(fragment) =>
                Selection::Unsupported(OpaqueNode::from_ast_inline_fragment(fragment)),
        }
    }

    pub fn as_field(&self) -> Option<&FieldNode> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }
}

/// An ordered list of [`Selection`]s (the `{ ... }` block of an operation or
/// field).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub(crate) items: Vec<Selection>,
}
impl SelectionSet {
    pub(crate) fn from_ast(ast_selection_set: &ast::operation::SelectionSet) -> Self {
        Self {
            items: ast_selection_set.items.iter()
                .map(Selection::from_ast)
                .collect(),
        }
    }

    pub fn new(items: Vec<Selection>) -> Self {
        Self { items }
    }

    /// Iterate over only the [`FieldNode`] selections in this set.
    pub fn fields(&self) -> impl Iterator<Item = &FieldNode> {
        self.items.iter().filter_map(Selection::as_field)
    }

    /// Find a direct child field by its response name.
    pub fn field(&self, response_name: &str) -> Option<&FieldNode> {
        self.fields().find(|field| field.response_name() == response_name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Selection] {
        &self.items
    }
}
