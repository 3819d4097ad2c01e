use crate::edit_args::EditArgs;
use crate::query_session::QuerySession;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_querygen::document::DEFAULT_INDENT;
use libgraphql_querygen::transform::TransformEngine;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TransformCmd {
    #[command(flatten)]
    edits: EditArgs,

    #[arg(
        default_value_t=DEFAULT_INDENT,
        help="Spaces per level of indentation in the printed query.",
        long,
    )]
    indent: usize,

    #[arg(
        help="Set the operation's name. An empty name removes it.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to the GraphQL query document to edit.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}
impl TransformCmd {
    fn transform(&self) -> anyhow::Result<String> {
        let query_src = std::fs::read_to_string(&self.query_file)
            .with_context(|| format!("Failed to read {}", self.query_file.display()))?;

        let engine = TransformEngine::new()
            .with_empty_selection_policy(self.edits.empty_selection_policy());
        let document = engine.parse_document(&query_src)
            .with_context(|| format!("Failed to parse {}", self.query_file.display()))?;

        let mut session = QuerySession::new(document, engine);
        session.apply_edits(&self.edits)?;
        if let Some(operation_name) = &self.operation_name {
            session.rename(operation_name)?;
        }

        Ok(session.document().to_query_text(self.indent).trim_end().to_string())
    }
}

#[inherent::inherent]
impl RunnableCommand for TransformCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.transform().into()
    }
}
