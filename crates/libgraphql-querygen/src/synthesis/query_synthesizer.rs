use crate::document::Argument;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::schema::SchemaModel;
use crate::synthesis::SelectionNode;
use crate::synthesis::SynthesisConfig;
use crate::synthesis::SynthesisError;
use crate::synthesis::SynthesizedQuery;
use crate::synthesis::VariableNameAllocator;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SynthesisError>;

const TYPENAME_FIELD: &str = "__typename";

/// Expands a root field of a [`SchemaModel`] into a complete selection tree.
///
/// The walk over the schema uses an explicit work stack, so arbitrarily deep
/// (or cyclic) schemas never exhaust the call stack. See
/// [`SynthesisConfig::with_max_depth`] for how expansion is bounded.
#[derive(Debug)]
pub struct QuerySynthesizer<'schema> {
    config: SynthesisConfig,
    schema: &'schema SchemaModel,
}
impl<'schema> QuerySynthesizer<'schema> {
    pub fn new(schema: &'schema SchemaModel) -> Self {
        Self {
            config: SynthesisConfig::default(),
            schema,
        }
    }

    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize a query selecting `root_field_name` and everything beneath
    /// it.
    pub fn synthesize(&self, root_field_name: &str) -> Result<SynthesizedQuery> {
        let root_fields = self.schema.root_fields()?;
        let root_field = root_fields.get(root_field_name).ok_or_else(|| {
            SynthesisError::UnknownRootField {
                available: root_fields.keys().cloned().collect(),
                field_name: root_field_name.to_string(),
            }
        })?;

        log::debug!(
            "Synthesizing `{root_field_name}` (max depth: {:?}, nested arguments: {}).",
            self.config.max_depth,
            self.config.bind_nested_arguments,
        );

        let mut walk = SchemaWalk {
            allocator: VariableNameAllocator::new(),
            arena: vec![PendingNode::for_field(root_field, None)],
            variables: vec![],
        };
        let mut stack = vec![(0usize, 1usize)];

        while let Some((idx, depth)) = stack.pop() {
            let Some(field) = walk.arena[idx].field else {
                continue;
            };

            if idx == 0 || self.config.bind_nested_arguments {
                walk.bind_arguments(idx, field);
            }

            let type_name = self.schema.resolve_return_type(field)?;
            let type_ = self.schema.type_of(type_name)?;
            if !type_.is_composite() {
                continue;
            }

            if self.should_truncate(&walk, idx, depth, type_name) {
                log::trace!(
                    "Truncating `{}` ({type_name}) at depth {depth}.",
                    field.name(),
                );
                walk.arena[idx].truncated = true;
                continue;
            }
            let child_idxs = match type_ {
                // A union has no fields of its own to select.
                GraphQLType::Union(_) => vec![
                    walk.push(PendingNode::typename(idx)),
                ],

                _ => self.schema.fields_of(type_name)?
                    .values()
                    .map(|child_field| walk.push(
                        PendingNode::for_field(child_field, Some(idx)),
                    ))
                    .collect::<Vec<_>>(),
            };
            if child_idxs.is_empty() {
                log::trace!(
                    "Truncating `{}` ({type_name}): the type declares no fields.",
                    field.name(),
                );
                walk.arena[idx].truncated = true;
                continue;
            }
            walk.arena[idx].expanded_type = Some(type_name);

            // Reversed so that children pop (and so bind their variables) in
            // document order.
            for child_idx in child_idxs.iter().rev() {
                stack.push((*child_idx, depth + 1));
            }
            walk.arena[idx].children = child_idxs;
        }

        let root = walk.assemble();
        log::debug!(
            "Synthesized `{root_field_name}`: depth {}, {} variable(s).",
            root.depth(),
            walk.variables.len(),
        );

        Ok(SynthesizedQuery {
            indent: self.config.indent,
            operation_name: self.config.operation_name.clone(),
            root,
            variables: walk.variables,
        })
    }

    /// Synthesize every root field, in declaration order.
    pub fn synthesize_all(&self) -> Result<IndexMap<String, SynthesizedQuery>> {
        self.schema.root_fields()?
            .keys()
            .map(|field_name| Ok((field_name.to_string(), self.synthesize(field_name)?)))
            .collect()
    }

    fn should_truncate(
        &self,
        walk: &SchemaWalk<'schema>,
        idx: usize,
        depth: usize,
        type_name: &str,
    ) -> bool {
        if let Some(max_depth) = self.config.max_depth {
            return depth >= max_depth.max(1);
        }

        // Unbounded: stop at the first type that repeats along the path.
        let mut ancestor = walk.arena[idx].parent;
        while let Some(ancestor_idx) = ancestor {
            let node = &walk.arena[ancestor_idx];
            if node.expanded_type == Some(type_name) {
                return true;
            }
            ancestor = node.parent;
        }
        self.schema.query_type_name() == Some(type_name)
    }
}

/// A selection node under construction, addressed by its index in the
/// [`SchemaWalk`] arena.
#[derive(Debug, Default)]
struct PendingNode<'schema> {
    arguments: Vec<Argument>,
    children: Vec<usize>,
    expanded_type: Option<&'schema str>,
    /// `None` only for the synthetic `__typename` selection.
    field: Option<&'schema Field>,
    parent: Option<usize>,
    truncated: bool,
}
impl<'schema> PendingNode<'schema> {
    fn for_field(field: &'schema Field, parent: Option<usize>) -> Self {
        Self {
            field: Some(field),
            parent,
            ..Default::default()
        }
    }

    fn typename(parent: usize) -> Self {
        Self {
            parent: Some(parent),
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        self.field.map(Field::name).unwrap_or(TYPENAME_FIELD)
    }
}

struct SchemaWalk<'schema> {
    allocator: VariableNameAllocator,
    arena: Vec<PendingNode<'schema>>,
    variables: Vec<VariableDefinition>,
}
impl<'schema> SchemaWalk<'schema> {
    fn bind_arguments(&mut self, idx: usize, field: &'schema Field) {
        for (param_name, param) in field.parameters() {
            let var_name = self.allocator.allocate(param_name);
            self.variables.push(VariableDefinition {
                default_value: param.default_value().cloned(),
                name: var_name.clone(),
                type_annotation: param.type_annotation().clone(),
            });
            self.arena[idx].arguments.push(Argument::new(
                param_name.as_str(),
                Value::Variable(var_name),
            ));
        }
    }

    fn push(&mut self, node: PendingNode<'schema>) -> usize {
        self.arena.push(node);
        self.arena.len() - 1
    }

    /// Fold the arena into a [`SelectionNode`] tree. Children always sit at
    /// higher indices than their parent, so walking the arena backwards
    /// finishes every child before its parent.
    fn assemble(&mut self) -> SelectionNode {
        let mut finished: Vec<Option<SelectionNode>> = vec![None; self.arena.len()];
        for idx in (0..self.arena.len()).rev() {
            let pending = std::mem::take(&mut self.arena[idx]);
            let name = pending.name().to_string();
            let children =
                if pending.expanded_type.is_some() {
                    Some(
                        pending.children.iter()
                            .filter_map(|child_idx| finished[*child_idx].take())
                            .collect(),
                    )
                } else {
                    None
                };

            finished[idx] = Some(SelectionNode {
                arguments: pending.arguments,
                children,
                name,
                truncated: pending.truncated,
            });
        }

        finished.into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| SelectionNode::leaf(TYPENAME_FIELD))
    }
}
