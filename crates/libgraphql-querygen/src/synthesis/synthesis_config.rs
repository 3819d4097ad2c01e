use crate::document::DEFAULT_INDENT;

/// Knobs for [`QuerySynthesizer`](crate::synthesis::QuerySynthesizer).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SynthesisConfig {
    pub(crate) bind_nested_arguments: bool,
    pub(crate) indent: usize,
    pub(crate) max_depth: Option<usize>,
    pub(crate) operation_name: Option<String>,
}
impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, arguments declared on every synthesized field (not just
    /// the root field) are bound to operation variables.
    pub fn with_bind_nested_arguments(mut self, bind_nested_arguments: bool) -> Self {
        self.bind_nested_arguments = bind_nested_arguments;
        self
    }

    /// Spaces per nesting level used by
    /// [`SynthesizedQuery::to_query_text`](crate::synthesis::SynthesizedQuery::to_query_text).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Bound the depth of the synthesized tree. The root field sits at depth
    /// 1; a composite field reaching the bound is emitted without a
    /// selection set. `None` (the default) leaves depth unbounded and
    /// instead stops expanding a type that already appears among a field's
    /// ancestors.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_operation_name(mut self, operation_name: Option<String>) -> Self {
        self.operation_name = operation_name;
        self
    }

    pub fn bind_nested_arguments(&self) -> bool {
        self.bind_nested_arguments
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }
}
impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            bind_nested_arguments: false,
            indent: DEFAULT_INDENT,
            max_depth: None,
            operation_name: None,
        }
    }
}
