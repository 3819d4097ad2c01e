use crate::ast;
use crate::document::Directive;
use crate::document::SelectionSet;
use crate::document::VariableDefinition;

/// The root query operation of a [`QueryDocument`](crate::document::QueryDocument).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variables: Vec<VariableDefinition>,
}
impl Operation {
    pub(crate) fn from_ast_query(ast_query: &ast::operation::Query) -> Self {
        Self {
            directives: ast_query.directives.iter()
                .map(Directive::from_ast)
                .collect(),
            name: ast_query.name.as_ref().map(|name| name.to_string()),
            selection_set: SelectionSet::from_ast(&ast_query.selection_set),
            variables: ast_query.variable_definitions.iter()
                .map(VariableDefinition::from_ast)
                .collect(),
        }
    }

    /// The `{ ... }` shorthand form: an anonymous query with no variables.
    pub(crate) fn from_ast_selection_set(
        ast_selection_set: &ast::operation::SelectionSet,
    ) -> Self {
        Self {
            directives: vec![],
            name: None,
            selection_set: SelectionSet::from_ast(ast_selection_set),
            variables: vec![],
        }
    }

    pub fn new(selection_set: SelectionSet) -> Self {
        Self {
            selection_set,
            ..Default::default()
        }
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_variables(mut self, variables: Vec<VariableDefinition>) -> Self {
        self.variables = variables;
        self
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|var_def| var_def.name == name)
    }

    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }
}
