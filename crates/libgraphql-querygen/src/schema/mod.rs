mod schema_error;
mod schema_model;
pub(crate) mod schema_model_builder;

pub use schema_error::SchemaError;
pub use schema_model::SchemaModel;
pub use schema_model_builder::NamedTypeDefLocation;
pub use schema_model_builder::SchemaBuildError;
pub use schema_model_builder::SchemaModelBuilder;

#[cfg(test)]
mod tests;
