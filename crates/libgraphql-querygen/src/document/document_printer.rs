use crate::document::Argument;
use crate::document::Directive;
use crate::document::FieldNode;
use crate::document::Operation;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::SelectionSet;
use std::fmt;

pub const DEFAULT_INDENT: usize = 2;

/// Deterministic pretty-printer for [`QueryDocument`]s.
///
/// Output is one field per line, nested selection sets indented by
/// `indent` spaces per level, arguments printed inline as `(a: 1, b: $b)`.
/// The root operation always prints with the explicit `query` keyword.
pub struct DocumentPrinter<'doc> {
    document: &'doc QueryDocument,
    indent: usize,
}
impl<'doc> DocumentPrinter<'doc> {
    pub fn new(document: &'doc QueryDocument) -> Self {
        Self {
            document,
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn write_operation(
        &self,
        f: &mut fmt::Formatter<'_>,
        operation: &Operation,
    ) -> fmt::Result {
        f.write_str("query")?;
        if let Some(name) = operation.name() {
            write!(f, " {name}")?;
        }

        if !operation.variables().is_empty() {
            f.write_str("(")?;
            for (idx, var_def) in operation.variables().iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "${}: {}", var_def.name(), var_def.type_annotation())?;
                if let Some(default_value) = var_def.default_value() {
                    write!(f, " = {default_value}")?;
                }
            }
            f.write_str(")")?;
        }

        write_directives(f, operation.directives())?;
        f.write_str(" ")?;
        self.write_selection_set(f, operation.selection_set(), 0)?;
        f.write_str("\n")
    }

    fn write_selection_set(
        &self,
        f: &mut fmt::Formatter<'_>,
        selection_set: &SelectionSet,
        level: usize,
    ) -> fmt::Result {
        f.write_str("{\n")?;
        for selection in selection_set.items() {
            match selection {
                Selection::Field(field) =>
                    self.write_field(f, field, level + 1)?,

                Selection::Unsupported(node) => {
                    for line in node.source().lines() {
                        self.write_indent(f, level + 1)?;
                        writeln!(f, "{line}")?;
                    }
                },
            }
        }
        self.write_indent(f, level)?;
        f.write_str("}")
    }

    fn write_field(
        &self,
        f: &mut fmt::Formatter<'_>,
        field: &FieldNode,
        level: usize,
    ) -> fmt::Result {
        self.write_indent(f, level)?;
        if let Some(alias) = field.alias() {
            write!(f, "{alias}: ")?;
        }
        f.write_str(field.name())?;
        write_arguments(f, field.arguments())?;
        write_directives(f, field.directives())?;

        // An empty selection set has no valid textual form; the field prints
        // bare.
        let selection_set = field.selection_set()
            .filter(|selection_set| !selection_set.is_empty());
        if let Some(selection_set) = selection_set {
            f.write_str(" ")?;
            self.write_selection_set(f, selection_set, level)?;
        }
        f.write_str("\n")
    }

    fn write_indent(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = level * self.indent)
    }
}
impl fmt::Display for DocumentPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_operation(f, self.document.operation())?;
        for node in self.document.auxiliary() {
            writeln!(f)?;
            writeln!(f, "{}", node.source())?;
        }
        Ok(())
    }
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Argument]) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }

    f.write_str("(")?;
    for (idx, arg) in arguments.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

fn write_directives(f: &mut fmt::Formatter<'_>, directives: &[Directive]) -> fmt::Result {
    for directive in directives {
        write!(f, " {directive}")?;
    }
    Ok(())
}
