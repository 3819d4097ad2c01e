use crate::document::fold;
use crate::document::Argument;
use crate::document::Folder;
use crate::document::QueryDocument;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::transform::value_coercion;
use crate::transform::variable_references;
use crate::transform::TransformError;
use std::collections::HashSet;

/// Gives every argument named `argument_name` (on fields and directives) a
/// new value.
///
/// An argument bound to a variable keeps its `$variable` reference; the
/// variable's definition gets the new value as its default instead. Any
/// other argument has its literal replaced in place, converted to the kind
/// of the literal it replaces.
///
/// A new value that is itself a variable reference rebinds the argument. A
/// definition left unreferenced by the rebinding is dropped, or renamed when
/// the new variable has no definition of its own yet.
pub(crate) struct ArgumentRewriter<'a> {
    argument_name: &'a str,
    bound_variables: HashSet<String>,
    pub(crate) error: Option<TransformError>,
    new_value: &'a Value,
    replaced_variables: Vec<String>,
    pub(crate) rewrites: usize,
}
impl<'a> ArgumentRewriter<'a> {
    pub fn new(argument_name: &'a str, new_value: &'a Value) -> Self {
        Self {
            argument_name,
            bound_variables: HashSet::new(),
            error: None,
            new_value,
            replaced_variables: vec![],
            rewrites: 0,
        }
    }

    fn rebind_variable_definitions(
        &self,
        document: &QueryDocument,
        new_var_name: &str,
    ) -> Result<QueryDocument, TransformError> {
        let operation = document.operation();
        let mut new_var_defined = operation.variable(new_var_name).is_some();
        let mut variables = vec![];
        for var_def in operation.variables() {
            let orphaned = self.replaced_variables.iter().any(|name| name == var_def.name())
                && !variable_references::is_variable_referenced(document, var_def.name());
            if !orphaned {
                variables.push(var_def.clone());
            } else if new_var_defined {
                log::trace!("Dropping `${}`: nothing refers to it anymore.", var_def.name());
            } else {
                log::trace!("Renaming `${}` to `${new_var_name}`.", var_def.name());
                variables.push(var_def.with_name(new_var_name));
                new_var_defined = true;
            }
        }

        if !new_var_defined {
            return Err(TransformError::UndefinedVariable {
                name: new_var_name.to_string(),
            });
        }
        Ok(document.with_operation(operation.clone().with_variables(variables)))
    }
}
impl Folder for ArgumentRewriter<'_> {
    fn fold_document(&mut self, document: &QueryDocument) -> QueryDocument {
        let folded = fold::fold_document(self, document);
        let Some(new_var_name) = self.new_value.as_variable_name() else {
            return folded;
        };
        if self.rewrites == 0 {
            return folded;
        }

        match self.rebind_variable_definitions(&folded, new_var_name) {
            Ok(rebound) => rebound,
            Err(err) => {
                self.error.get_or_insert(err);
                folded
            },
        }
    }

    fn fold_argument(&mut self, argument: &Argument) -> Argument {
        if argument.name() != self.argument_name {
            return argument.clone();
        }

        self.rewrites += 1;
        let current_value = argument.value();
        if let Some(new_var_name) = self.new_value.as_variable_name() {
            if let Some(old_var_name) = current_value.as_variable_name()
                && old_var_name != new_var_name
                && !self.replaced_variables.iter().any(|name| name == old_var_name) {
                self.replaced_variables.push(old_var_name.to_string());
            }
            return Argument::new(argument.name(), self.new_value.clone());
        }

        if let Some(var_name) = current_value.as_variable_name() {
            self.bound_variables.insert(var_name.to_string());
            return argument.clone();
        }

        match value_coercion::conform_to_literal(self.argument_name, self.new_value, current_value) {
            Ok(new_value) => Argument::new(argument.name(), new_value),
            Err(err) => {
                self.error.get_or_insert(err);
                argument.clone()
            },
        }
    }

    fn fold_variable_definition(
        &mut self,
        var_def: &VariableDefinition,
    ) -> VariableDefinition {
        if self.bound_variables.contains(var_def.name()) {
            log::trace!("Setting the default of `${}` to {}.", var_def.name(), self.new_value);
            var_def.with_default_value(Some(self.new_value.clone()))
        } else {
            var_def.clone()
        }
    }
}
