mod fields;
mod synthesize;
mod transform;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use fields::FieldsCmd;
use synthesize::SynthesizeCmd;
use transform::TransformCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-querygen")]
pub(crate) enum CommandEnum {
    /// List the root query fields a schema offers.
    Fields(Box<FieldsCmd>),

    /// Synthesize a query for a root field, optionally editing it.
    Synthesize(Box<SynthesizeCmd>),

    /// Edit an existing query document.
    Transform(Box<TransformCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Fields(cmd) => cmd.run(cli).await,
            Self::Synthesize(cmd) => cmd.run(cli).await,
            Self::Transform(cmd) => cmd.run(cli).await,
        }
    }
}
