use crate::document::fold;
use crate::document::FieldNode;
use crate::document::Folder;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::transform::EmptySelectionPolicy;
use std::collections::HashSet;

/// Removes fields whose names are not in `selected`.
///
/// Fields directly under the operation are anchors and are always kept. When
/// `scope` is set, only the direct children of the field at that path are
/// candidates for removal.
///
/// A kept field whose children were all pruned falls back to its first
/// original child. Only a field outside `selected` (which happens when a
/// scoped edit empties its target) is subject to the cascade policy.
pub(crate) struct SelectionPruner<'a> {
    policy: EmptySelectionPolicy,
    pub(crate) pruned: usize,
    scope: Option<&'a [String]>,
    selected: &'a HashSet<String>,
}
impl<'a> SelectionPruner<'a> {
    pub fn new(
        policy: EmptySelectionPolicy,
        selected: &'a HashSet<String>,
        scope: Option<&'a [String]>,
    ) -> Self {
        Self {
            policy,
            pruned: 0,
            scope,
            selected,
        }
    }

    fn is_prunable(&self, path: &[String]) -> bool {
        !path.is_empty() && self.scope.is_none_or(|scope| scope == path)
    }
}
impl Folder for SelectionPruner<'_> {
    fn fold_selection_set(
        &mut self,
        selection_set: &SelectionSet,
        path: &[String],
    ) -> SelectionSet {
        let prunable = self.is_prunable(path);
        let mut items = vec![];
        for selection in selection_set.items() {
            match selection {
                Selection::Field(field) => {
                    if prunable && !self.selected.contains(field.name()) {
                        log::trace!("Pruning `{}` under {path:?}.", field.response_name());
                        self.pruned += 1;
                        continue;
                    }
                    if let Some(field) = self.fold_field(field, path) {
                        items.push(Selection::Field(field));
                    }
                },

                Selection::Unsupported(node) =>
                    items.push(Selection::Unsupported(self.fold_unsupported(node))),
            }
        }
        SelectionSet::new(items)
    }

    fn fold_field(
        &mut self,
        field: &FieldNode,
        path: &[String],
    ) -> Option<FieldNode> {
        let mut folded = fold::fold_field(self, field, path);

        let original_first_child = field.selection_set()
            .and_then(|selection_set| selection_set.items().first());
        let emptied = folded.selection_set()
            .is_some_and(|selection_set| selection_set.is_empty());
        let Some(first_child) = original_first_child.filter(|_| emptied) else {
            return Some(folded);
        };

        // Anchors and selected fields stay put; only a field nobody asked
        // for (the target of a scoped selection) may be cascaded away.
        let is_anchor = path.is_empty();
        let is_selected = self.selected.contains(field.name());
        if is_anchor || is_selected || self.policy == EmptySelectionPolicy::RetainFirstChild {
            log::trace!(
                "Keeping the first child of `{}` so its selection set is not empty.",
                field.response_name(),
            );
            folded.selection_set = Some(SelectionSet::new(vec![first_child.clone()]));
            Some(folded)
        } else {
            log::trace!("Pruning `{}`: every child was pruned.", field.response_name());
            self.pruned += 1;
            None
        }
    }
}
