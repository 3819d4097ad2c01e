use crate::document::Operation;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::document::VariableDefinition;
use crate::synthesis::SelectionNode;

/// The result of synthesizing one root field: the selection tree plus the
/// operation-level variable definitions its arguments are bound to.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SynthesizedQuery {
    pub(crate) indent: usize,
    pub(crate) operation_name: Option<String>,
    pub(crate) root: SelectionNode,
    pub(crate) variables: Vec<VariableDefinition>,
}
impl SynthesizedQuery {
    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn root(&self) -> &SelectionNode {
        &self.root
    }

    /// Convert into a [`QueryDocument`]. Parsing the output of
    /// [`SynthesizedQuery::to_query_text`] produces an equal document.
    pub fn to_document(&self) -> QueryDocument {
        QueryDocument::new(
            Operation::new(SelectionSet::new(vec![
                Selection::Field(self.root.to_field_node()),
            ]))
            .with_name(self.operation_name.clone())
            .with_variables(self.variables.clone()),
        )
    }

    /// Print as query text, indented as configured at synthesis time.
    pub fn to_query_text(&self) -> String {
        self.to_document().to_query_text(self.indent)
    }

    /// Variable definitions in first-seen order.
    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }
}
