use crate::document::Argument;
use crate::document::FieldNode;
use crate::document::Selection;
use crate::document::SelectionSet;

/// One field of a synthesized selection tree.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionNode {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) children: Option<Vec<SelectionNode>>,
    pub(crate) name: String,
    pub(crate) truncated: bool,
}
impl SelectionNode {
    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            children: None,
            name: name.into(),
            truncated: false,
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// `None` for leaf fields and for truncated composite fields.
    pub fn children(&self) -> Option<&[SelectionNode]> {
        self.children.as_deref()
    }

    /// The number of levels in the tree rooted at this node (a leaf has
    /// depth 1).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in node.children().unwrap_or_default() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none() && !self.truncated
    }

    /// Indicates the field returns a composite type whose expansion was cut
    /// short by the depth bound or the cycle guard.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Convert this tree into the document model.
    pub fn to_field_node(&self) -> FieldNode {
        // Post-order over an explicit stack: a node is converted once all of
        // its children have been.
        let mut converted: Vec<FieldNode> = vec![];
        let mut stack = vec![(self, false)];
        while let Some((node, children_done)) = stack.pop() {
            let children = node.children().unwrap_or_default();
            if !children_done {
                stack.push((node, true));
                for child in children.iter().rev() {
                    stack.push((child, false));
                }
                continue;
            }

            let child_fields = converted.split_off(converted.len() - children.len());
            let selection_set =
                if child_fields.is_empty() {
                    None
                } else {
                    Some(SelectionSet::new(
                        child_fields.into_iter().map(Selection::Field).collect(),
                    ))
                };

            converted.push(
                FieldNode::new(node.name.as_str())
                    .with_arguments(node.arguments.clone())
                    .with_selection_set(selection_set),
            );
        }

        converted.pop().unwrap_or_else(|| FieldNode::new(self.name.as_str()))
    }
}
