mod query_synthesizer;
mod selection_node;
mod synthesis_config;
mod synthesis_error;
mod synthesized_query;
mod variable_name_allocator;

pub use query_synthesizer::QuerySynthesizer;
pub use selection_node::SelectionNode;
pub use synthesis_config::SynthesisConfig;
pub use synthesis_error::SynthesisError;
pub use synthesized_query::SynthesizedQuery;
pub use variable_name_allocator::VariableNameAllocator;

#[cfg(test)]
mod tests;
