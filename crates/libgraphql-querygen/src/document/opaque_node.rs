use crate::ast;
use crate::document::Directive;

/// The kinds of executable-document nodes this model carries without
/// interpreting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum NodeKind {
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
}
impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FragmentDefinition => "FragmentDefinition",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A node that is carried through every transformation untouched.
///
/// The node's canonical GraphQL source is kept so that a document containing
/// it can still be printed (and re-parsed into an equal document). Within a
/// selection set an [`OpaqueNode`] is the explicit "unsupported node" marker
/// for constructs the model does not interpret, such as fragment spreads.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OpaqueNode {
    pub(crate) kind: NodeKind,
    pub(crate) source: String,
}
impl OpaqueNode {
    pub(crate) fn from_ast_definition(def: &ast::operation::Definition) -> Self {
        use ast::operation::OperationDefinition;

        let kind = match def {
            ast::operation::Definition::Fragment(_) =>
                NodeKind::FragmentDefinition,
            ast::operation::Definition::Operation(OperationDefinition::Mutation(_)) =>
                NodeKind::Mutation,
            ast::operation::Definition::Operation(OperationDefinition::Subscription(_)) =>
                NodeKind::Subscription,
            ast::operation::Definition::Operation(OperationDefinition::Query(_))
                | ast::operation::Definition::Operation(OperationDefinition::SelectionSet(_)) =>
                NodeKind::Query,
        };

        Self {
            kind,
            source: def.to_string().trim_end().to_string(),
        }
    }

    pub(crate) fn from_ast_fragment_spread(
        spread: &ast::operation::FragmentSpread,
    ) -> Self {
        Self {
            kind: NodeKind::FragmentSpread,
            source: format!(
                "...{}{}",
                spread.fragment_name,
                directives_source(&spread.directives),
            ),
        }
    }

    pub(crate) fn from_ast_inline_fragment(
        fragment: &ast::operation::InlineFragment,
    ) -> Self {
        let type_condition = match &fragment.type_condition {
            Some(ast::operation::TypeCondition::On(type_name)) =>
                format!(" on {type_name}"),
            None => String::new(),
        };

        Self {
            kind: NodeKind::InlineFragment,
            source: format!(
                "...{type_condition}{} {}",
                directives_source(&fragment.directives),
                fragment.selection_set.to_string().trim_end(),
            ),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The canonical GraphQL source of this node, without a trailing newline.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }
}

fn directives_source(ast_directives: &[ast::operation::Directive]) -> String {
    ast_directives.iter()
        .map(|ast_directive| format!(" {}", Directive::from_ast(ast_directive)))
        .collect()
}
