use crate::document::Argument;
use crate::document::Directive;
use crate::document::QueryDocument;
use crate::document::Selection;
use crate::document::Value;

/// Indicates whether anything in `document` still refers to `$var_name`.
///
/// Fragments and other opaque nodes are only available as source text, so
/// they are searched for the `$var_name` token.
pub(crate) fn is_variable_referenced(document: &QueryDocument, var_name: &str) -> bool {
    let operation = document.operation();
    if directives_reference(operation.directives(), var_name) {
        return true;
    }

    let mut stack = operation.selection_set().items().iter().collect::<Vec<_>>();
    while let Some(selection) = stack.pop() {
        match selection {
            Selection::Field(field) => {
                if arguments_reference(field.arguments(), var_name)
                    || directives_reference(field.directives(), var_name) {
                    return true;
                }
                if let Some(selection_set) = field.selection_set() {
                    stack.extend(selection_set.items());
                }
            },

            Selection::Unsupported(node) =>
                if source_references(node.source(), var_name) {
                    return true;
                },
        }
    }

    document.auxiliary().iter()
        .any(|node| source_references(node.source(), var_name))
}

fn directives_reference(directives: &[Directive], var_name: &str) -> bool {
    directives.iter()
        .any(|directive| arguments_reference(directive.arguments(), var_name))
}

fn arguments_reference(arguments: &[Argument], var_name: &str) -> bool {
    let mut stack = arguments.iter()
        .map(|arg| arg.value())
        .collect::<Vec<_>>();
    while let Some(value) = stack.pop() {
        match value {
            Value::Variable(name) if name == var_name => return true,
            Value::List(items) => stack.extend(items),
            Value::Object(entries) => stack.extend(entries.values()),
            _ => (),
        }
    }
    false
}

fn source_references(source: &str, var_name: &str) -> bool {
    let token = format!("${var_name}");
    source.match_indices(&token).any(|(start, _)| {
        source[start + token.len()..].chars().next()
            .is_none_or(|ch| ch != '_' && !ch.is_ascii_alphanumeric())
    })
}
