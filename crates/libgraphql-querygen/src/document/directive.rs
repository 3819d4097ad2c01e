use crate::ast;
use crate::document::Argument;
use crate::document::Value;

/// A directive annotation (e.g. `@include(if: $withEmail)`). Directives are
/// preserved as written; they carry no semantics in this model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: String,
}
impl Directive {
    pub(crate) fn from_ast(ast_directive: &ast::operation::Directive) -> Self {
        Self {
            arguments: ast_directive.arguments.iter()
                .map(|(name, value)| Argument::new(name.to_string(), Value::from_ast(value)))
                .collect(),
            name: ast_directive.name.to_string(),
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.arguments.is_empty() {
            f.write_str("(")?;
            for (idx, arg) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
