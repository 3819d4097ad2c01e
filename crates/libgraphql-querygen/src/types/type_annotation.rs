use crate::ast;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`VariableDefinition`](crate::document::VariableDefinition).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                },

            ast::operation::Type::NamedType(name) =>
                Self::Named {
                    name: name.to_string(),
                    nullable,
                },

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable,
        }
    }

    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named {
            name: name.into(),
            nullable,
        }
    }

    /// Recursively strip list and non-null wrappers and return the name of
    /// the inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
