use crate::ast;
use crate::document::Argument;
use crate::document::Directive;
use crate::document::SelectionSet;
use crate::document::Value;

/// A single selected field, e.g. `author: user(id: $id) { name }`.
///
/// `selection_set` is `None` for leaf fields (and for composite fields that
/// were left bare); `Some` otherwise.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldNode {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FieldNode {
    pub(crate) fn from_ast(ast_field: &ast::operation::Field) -> Self {
        let selection_set =
            if ast_field.selection_set.items.is_empty() {
                None
            } else {
                Some(SelectionSet::from_ast(&ast_field.selection_set))
            };

        Self {
            alias: ast_field.alias.as_ref().map(|alias| alias.to_string()),
            arguments: ast_field.arguments.iter()
                .map(|(name, value)| Argument::new(name.to_string(), Value::from_ast(value)))
                .collect(),
            directives: ast_field.directives.iter()
                .map(Directive::from_ast)
                .collect(),
            name: ast_field.name.to_string(),
            selection_set,
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            directives: vec![],
            name: name.into(),
            selection_set: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_selection_set(mut self, selection_set: Option<SelectionSet>) -> Self {
        self.selection_set = selection_set;
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field occupies in a response: its alias if it has one,
    /// otherwise its name.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
