use crate::edit_args::EditArgs;
use crate::query_session::QuerySession;
use crate::schema_files::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_querygen::document::DEFAULT_INDENT;
use libgraphql_querygen::synthesis::QuerySynthesizer;
use libgraphql_querygen::synthesis::SynthesisConfig;
use libgraphql_querygen::synthesis::SynthesizedQuery;
use libgraphql_querygen::transform::TransformEngine;

#[derive(Debug, clap::Args)]
pub(crate) struct SynthesizeCmd {
    #[arg(
        conflicts_with="field",
        help="Synthesize a query for every root field.",
        long,
    )]
    all: bool,

    #[command(flatten)]
    edits: EditArgs,

    #[arg(
        help="The root query field to synthesize a query for.",
        long,
        required_unless_present="all",
    )]
    field: Option<String>,

    #[arg(
        default_value_t=DEFAULT_INDENT,
        help="Spaces per level of indentation in the printed query.",
        long,
    )]
    indent: usize,

    #[arg(
        help="Print the synthesis result (selection tree and variables) and \
             the final query text as JSON.",
        long,
    )]
    json: bool,

    #[arg(
        help="Stop expanding fields this many levels below the root field. \
             Without it, expansion stops where a type repeats along a path.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Bind the arguments of nested fields to variables too, not just \
             those of the root field.",
        long="nested-args",
    )]
    nested_args: bool,

    #[arg(
        help="Name for the synthesized operation.",
        long,
    )]
    operation_name: Option<String>,

    #[command(flatten)]
    schema: SchemaArgs,
}
impl SynthesizeCmd {
    fn synthesize(&self) -> anyhow::Result<String> {
        let schema = self.schema.load()?;
        let config = SynthesisConfig::new()
            .with_bind_nested_arguments(self.nested_args)
            .with_indent(self.indent)
            .with_max_depth(self.max_depth)
            .with_operation_name(self.operation_name.clone());
        let synthesizer = QuerySynthesizer::new(&schema).with_config(config);

        let queries: Vec<(String, SynthesizedQuery)> = match &self.field {
            Some(field_name) if !self.all =>
                vec![(field_name.to_string(), synthesizer.synthesize(field_name)?)],
            _ => synthesizer.synthesize_all()?.into_iter().collect(),
        };

        let engine = TransformEngine::new()
            .with_empty_selection_policy(self.edits.empty_selection_policy());
        let mut outputs = vec![];
        for (field_name, query) in queries {
            let mut session = QuerySession::new(query.to_document(), engine.clone());
            session.apply_edits(&self.edits)?;
            let query_text = session.document().to_query_text(self.indent);
            log::debug!("Finished query for `{field_name}`.");
            outputs.push((field_name, query, query_text));
        }

        if self.json {
            let json_outputs = outputs.iter()
                .map(|(field_name, query, query_text)| serde_json::json!({
                    "field": field_name,
                    "query": query_text,
                    "synthesized": query,
                }))
                .collect::<Vec<_>>();
            let json =
                if let [single] = json_outputs.as_slice() {
                    serde_json::to_string_pretty(single)?
                } else {
                    serde_json::to_string_pretty(&json_outputs)?
                };
            return Ok(json);
        }

        let query_texts = outputs.into_iter()
            .map(|(_, _, query_text)| query_text.trim_end().to_string())
            .collect::<Vec<_>>();
        Ok(query_texts.join("\n\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for SynthesizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.synthesize().into()
    }
}
