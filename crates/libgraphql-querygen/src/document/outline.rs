use crate::document::NodeKind;
use crate::document::QueryDocument;
use crate::document::Selection;

/// One row of a flattened, depth-annotated view of a document's root
/// selection tree. Top-level fields have depth `0`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OutlineEntry {
    Field {
        argument_names: Vec<String>,
        depth: usize,
        has_selection_set: bool,
        name: String,
        /// Response names from the top-level field down to (and including)
        /// this one.
        path: Vec<String>,
    },

    /// A selection the model does not interpret.
    Unsupported {
        depth: usize,
        kind: NodeKind,
    },
}
impl OutlineEntry {
    pub fn depth(&self) -> usize {
        match self {
            Self::Field { depth, .. } => *depth,
            Self::Unsupported { depth, .. } => *depth,
        }
    }
}

/// Walk `document`'s root operation in pre-order and return one
/// [`OutlineEntry`] per selection.
pub fn outline(document: &QueryDocument) -> Vec<OutlineEntry> {
    let mut entries = vec![];
    let mut stack: Vec<(&Selection, usize, Vec<String>)> =
        document.operation().selection_set().items().iter()
            .rev()
            .map(|selection| (selection, 0, vec![]))
            .collect();

    while let Some((selection, depth, parent_path)) = stack.pop() {
        match selection {
            Selection::Field(field) => {
                let mut path = parent_path;
                path.push(field.response_name().to_string());

                if let Some(selection_set) = field.selection_set() {
                    for child in selection_set.items().iter().rev() {
                        stack.push((child, depth + 1, path.clone()));
                    }
                }

                entries.push(OutlineEntry::Field {
                    argument_names: field.arguments().iter()
                        .map(|arg| arg.name().to_string())
                        .collect(),
                    depth,
                    has_selection_set: field.selection_set()
                        .is_some_and(|selection_set| !selection_set.is_empty()),
                    name: field.name().to_string(),
                    path,
                });
            },

            Selection::Unsupported(node) =>
                entries.push(OutlineEntry::Unsupported {
                    depth,
                    kind: node.kind(),
                }),
        }
    }

    entries
}
