/// What happens to a composite field when a selection edit removes every one
/// of its children.
///
/// Anchor fields (those directly in the operation's root selection set) are
/// never removed: under either policy an anchor keeps its first original
/// child. Neither is a field whose own name was selected; it keeps its first
/// original child too. The policy therefore decides the fate of the field a
/// scoped selection targets when none of its children were selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum EmptySelectionPolicy {
    /// Remove the emptied field from its parent as well, cascading upwards
    /// until an anchor is reached.
    #[default]
    CascadePrune,

    /// Keep the emptied field, restoring its first original child.
    RetainFirstChild,
}
