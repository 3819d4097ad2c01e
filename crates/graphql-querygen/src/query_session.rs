use crate::edit_args;
use crate::edit_args::EditArgs;
use libgraphql_querygen::document::QueryDocument;
use libgraphql_querygen::transform::TransformEngine;

/// Owns the "current" document while a sequence of edits is applied to it.
///
/// Each edit replaces the current document with the engine's result; the
/// engine itself never holds on to a document.
#[derive(Debug)]
pub(crate) struct QuerySession {
    document: QueryDocument,
    engine: TransformEngine,
}
impl QuerySession {
    pub(crate) fn new(document: QueryDocument, engine: TransformEngine) -> Self {
        Self {
            document,
            engine,
        }
    }

    pub(crate) fn apply_edits(&mut self, edits: &EditArgs) -> anyhow::Result<()> {
        if let Some(selected_fields) = &edits.selected_fields {
            self.document = match edits.path() {
                Some(path) => self.engine.apply_selection_at(
                    &self.document,
                    &path,
                    selected_fields,
                )?,
                None => self.engine.apply_selection(&self.document, selected_fields),
            };
        }

        for assignment in &edits.arguments {
            let (argument_name, raw) = edit_args::parse_assignment(assignment)?;
            self.document = self.engine.apply_argument_text(
                &self.document,
                argument_name,
                raw,
            )?;
        }

        Ok(())
    }

    /// An empty name clears the operation name.
    pub(crate) fn rename(&mut self, operation_name: &str) -> anyhow::Result<()> {
        let name = Some(operation_name.trim()).filter(|name| !name.is_empty());
        self.document = self.engine.rename_operation(&self.document, name)?;
        Ok(())
    }

    pub(crate) fn document(&self) -> &QueryDocument {
        &self.document
    }
}
