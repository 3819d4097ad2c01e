use crate::ast;
use crate::document::DocumentError;
use crate::document::DocumentPrinter;
use crate::document::NodeKind;
use crate::document::OpaqueNode;
use crate::document::Operation;

type Result<T> = std::result::Result<T, DocumentError>;

/// A structured GraphQL query document.
///
/// The first query operation in the source (named, anonymous, or the
/// `{ ... }` shorthand) is the root [`Operation`]. Every other definition
/// (fragments, further operations, mutations, subscriptions) is carried in
/// [`QueryDocument::auxiliary`] as an [`OpaqueNode`] and printed back
/// unchanged after the root operation.
///
/// A `QueryDocument` is an immutable value: edits produce new documents (see
/// [`TransformEngine`](crate::transform::TransformEngine)).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct QueryDocument {
    pub(crate) auxiliary: Vec<OpaqueNode>,
    pub(crate) operation: Operation,
}
impl QueryDocument {
    pub(crate) fn from_ast(ast_doc: &ast::operation::Document) -> Result<Self> {
        use ast::operation::Definition;
        use ast::operation::OperationDefinition;

        let mut auxiliary = vec![];
        let mut operation = None;
        for def in &ast_doc.definitions {
            let root_candidate = match def {
                Definition::Operation(OperationDefinition::Query(query))
                    if operation.is_none() =>
                    Some(Operation::from_ast_query(query)),

                Definition::Operation(OperationDefinition::SelectionSet(selection_set))
                    if operation.is_none() =>
                    Some(Operation::from_ast_selection_set(selection_set)),

                _ => None,
            };

            match root_candidate {
                Some(root) => operation = Some(root),
                None => auxiliary.push(OpaqueNode::from_ast_definition(def)),
            }
        }

        let operation = operation.ok_or_else(|| {
            let kinds = auxiliary.iter()
                .map(|node| node.kind().name())
                .collect::<Vec<_>>();
            DocumentError::InvalidDocument {
                reason: if kinds.is_empty() {
                    "the document defines nothing".to_string()
                } else {
                    format!("found only: {}", kinds.join(", "))
                },
            }
        })?;

        Ok(Self {
            auxiliary,
            operation,
        })
    }

    pub fn new(operation: Operation) -> Self {
        Self {
            auxiliary: vec![],
            operation,
        }
    }

    /// Parse query text into a [`QueryDocument`].
    pub fn parse(query_src: &str) -> Result<Self> {
        let ast_doc = ast::operation::parse(query_src)
            .map_err(|err| DocumentError::ParseError {
                message: err.to_string(),
            })?;
        Self::from_ast(&ast_doc)
    }

    pub fn with_operation(&self, operation: Operation) -> Self {
        Self {
            auxiliary: self.auxiliary.clone(),
            operation,
        }
    }

    /// Definitions carried through untouched, in source order.
    pub fn auxiliary(&self) -> &[OpaqueNode] {
        &self.auxiliary
    }

    /// Auxiliary fragment definitions only.
    pub fn fragments(&self) -> impl Iterator<Item = &OpaqueNode> {
        self.auxiliary.iter()
            .filter(|node| node.kind() == NodeKind::FragmentDefinition)
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Print this document as canonical query text using `indent` spaces per
    /// nesting level.
    pub fn to_query_text(&self, indent: usize) -> String {
        DocumentPrinter::new(self)
            .with_indent(indent)
            .to_string()
    }
}
impl std::fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DocumentPrinter::new(self))
    }
}
impl std::str::FromStr for QueryDocument {
    type Err = DocumentError;

    fn from_str(query_src: &str) -> Result<Self> {
        Self::parse(query_src)
    }
}
