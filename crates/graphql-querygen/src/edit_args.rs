use libgraphql_querygen::transform::EmptySelectionPolicy;

/// Edits to apply to a query document, in the order they are listed here:
/// field selection first, then each `--arg` in turn.
#[derive(Debug, Default, clap::Args)]
pub(crate) struct EditArgs {
    #[arg(
        help="Dot-separated response names leading to the field whose \
             children --select applies to (e.g. `user.friends`). Without it \
             --select applies to every level below the top-level fields.",
        long="at",
        requires="selected_fields",
    )]
    pub(crate) at_path: Option<String>,

    #[arg(
        help="Set an argument's value (`name=value`). Repeatable; applied in \
             order.",
        long="arg",
        value_name="NAME=VALUE",
    )]
    pub(crate) arguments: Vec<String>,

    #[arg(
        help="When --select leaves the --at field with no children, keep its \
             first child instead of removing the field.",
        long,
    )]
    pub(crate) retain_first_child: bool,

    #[arg(
        help="Comma-separated names of the fields to keep.",
        long="select",
        num_args=0..,
        value_delimiter=',',
        value_name="FIELD_NAMES",
    )]
    pub(crate) selected_fields: Option<Vec<String>>,
}
impl EditArgs {
    pub(crate) fn empty_selection_policy(&self) -> EmptySelectionPolicy {
        if self.retain_first_child {
            EmptySelectionPolicy::RetainFirstChild
        } else {
            EmptySelectionPolicy::CascadePrune
        }
    }

    pub(crate) fn path(&self) -> Option<Vec<String>> {
        self.at_path.as_deref().map(parse_path)
    }
}

pub(crate) fn parse_path(at_path: &str) -> Vec<String> {
    at_path.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a `name=value` assignment. The value may itself contain `=`.
pub(crate) fn parse_assignment(assignment: &str) -> anyhow::Result<(&str, &str)> {
    let Some((name, value)) = assignment.split_once('=') else {
        anyhow::bail!("Expected `NAME=VALUE`, found `{assignment}`");
    };

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Missing argument name in `{assignment}`");
    }
    Ok((name, value))
}
