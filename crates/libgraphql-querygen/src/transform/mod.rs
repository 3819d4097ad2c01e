mod argument_rewriter;
mod empty_selection_policy;
mod selection_pruner;
mod transform_engine;
mod transform_error;
mod value_coercion;
mod variable_references;

pub use empty_selection_policy::EmptySelectionPolicy;
pub use transform_engine::TransformEngine;
pub use transform_error::TransformError;

#[cfg(test)]
mod tests;
