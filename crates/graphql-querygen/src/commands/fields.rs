use crate::schema_files::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_querygen::types::Field;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldsCmd {
    #[command(flatten)]
    schema: SchemaArgs,
}
impl FieldsCmd {
    fn list_fields(&self) -> anyhow::Result<String> {
        let schema = self.schema.load()?;
        let lines = schema.root_fields()?
            .values()
            .map(field_signature)
            .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for FieldsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.list_fields().into()
    }
}

/// `name(arg: Type = default, ...): ReturnType`
fn field_signature(field: &Field) -> String {
    let params = field.parameters()
        .values()
        .map(|param| match param.default_value() {
            Some(default_value) => format!(
                "{}: {} = {default_value}",
                param.name(),
                param.type_annotation(),
            ),
            None => format!("{}: {}", param.name(), param.type_annotation()),
        })
        .collect::<Vec<_>>();

    if params.is_empty() {
        format!("{}: {}", field.name(), field.type_annotation())
    } else {
        format!(
            "{}({}): {}",
            field.name(),
            params.join(", "),
            field.type_annotation(),
        )
    }
}
