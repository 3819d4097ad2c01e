use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::SchemaModel;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`SchemaModel`].
///
/// Schema sources may be split across any number of strings and files. Type
/// extensions are merged only once everything is loaded, so an
/// `extend type` may appear before the type it extends.
#[derive(Debug)]
pub struct SchemaModelBuilder {
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    types_map_builder: TypesMapBuilder,
}
impl SchemaModelBuilder {
    pub fn build(mut self) -> Result<SchemaModel> {
        let extensions = std::mem::take(&mut self.extensions);
        for (ext_path, ext) in extensions {
            self.merge_type_extension(ext_path.as_path(), ext)?;
        }

        let types = self.types_map_builder.into_types_map();
        let query_type_name = match self.query_type {
            Some(def) => Some(def.type_name),
            None if matches!(types.get("Query"), Some(GraphQLType::Object(_))) =>
                Some("Query".to_string()),
            None => None,
        };

        log::debug!(
            "Built schema with {} types (root query type: {query_type_name:?}).",
            types.len(),
        );

        Ok(SchemaModel {
            query_type_name,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn merge_type_extension(
        &mut self,
        ext_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Union),
        };
        let ext_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(ext_path, position).into();

        let Some(existing_type) = self.types_map_builder.get_type_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_type_loc: ext_loc,
            });
        };

        if existing_type.kind() != expected_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                extension_kind: expected_kind,
                extension_loc: ext_loc,
                type_kind: existing_type.kind(),
                type_name: type_name.to_string(),
            });
        }

        log::trace!("Merging extension of `{type_name}` from {ext_loc}.");
        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                ),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                for ext_field in &ext.fields {
                    if inputobj_type.fields.contains_key(ext_field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            field_name: ext_field.name.to_string(),
                            location: loc::FilePosition::from_pos(
                                ext_path,
                                ext_field.position,
                            ).into(),
                            type_name: ext.name.to_string(),
                        });
                    }
                    inputobj_type.fields.insert(
                        ext_field.name.to_string(),
                        Parameter::from_ast(ext_field),
                    );
                }
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                merge_fields(&mut iface_type.0, ext_path, &ext.fields)?,

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                merge_fields(&mut obj_type.0, ext_path, &ext.fields)?;
                obj_type.0.interfaces.extend(ext.implements_interfaces);
            },

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                union_type.members.extend(ext.types),

            // Scalar extensions only add directives, which carry no meaning
            // here.
            _ => (),
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            // Directive definitions have no bearing on query synthesis.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if let Some(type_name) = &schema_def.query {
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            if let Some(existing_typedef_loc) = &self.query_type {
                return Err(SchemaBuildError::DuplicateQueryTypeDefinition {
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            self.query_type = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let (type_name, position, type_) = match type_def {
            TypeDefinition::Enum(def) => (def.name.clone(), def.position, GraphQLType::Enum(EnumType {
                description: def.description,
                name: def.name,
                values: def.values.into_iter().map(|value| value.name).collect(),
            })),

            TypeDefinition::InputObject(def) => {
                let mut fields = IndexMap::new();
                for input_field in &def.fields {
                    if fields.contains_key(input_field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            field_name: input_field.name.to_string(),
                            location: loc::FilePosition::from_pos(
                                file_path,
                                input_field.position,
                            ).into(),
                            type_name: def.name.to_string(),
                        });
                    }
                    fields.insert(input_field.name.to_string(), Parameter::from_ast(input_field));
                }

                (def.name.clone(), def.position, GraphQLType::InputObject(InputObjectType {
                    description: def.description,
                    fields,
                    name: def.name,
                }))
            },

            TypeDefinition::Interface(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: def.implements_interfaces,
                    name: def.name.clone(),
                };
                merge_fields(&mut data, file_path, &def.fields)?;
                (def.name, def.position, GraphQLType::Interface(InterfaceType(data)))
            },

            TypeDefinition::Object(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: def.implements_interfaces,
                    name: def.name.clone(),
                };
                merge_fields(&mut data, file_path, &def.fields)?;
                (def.name, def.position, GraphQLType::Object(ObjectType(data)))
            },

            TypeDefinition::Scalar(def) => (def.name.clone(), def.position, GraphQLType::Scalar(ScalarType {
                description: def.description,
                name: def.name,
            })),

            TypeDefinition::Union(def) => (def.name.clone(), def.position, GraphQLType::Union(UnionType {
                description: def.description,
                members: def.types,
                name: def.name,
            })),
        };

        log::trace!("Loaded {} type `{type_name}`.", type_.kind().name());
        self.types_map_builder.add_new_type(
            loc::FilePosition::from_pos(file_path, position),
            type_name.as_str(),
            type_,
        )
    }
}
impl Default for SchemaModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_fields(
    type_data: &mut ObjectOrInterfaceTypeData,
    file_path: &Path,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        if type_data.fields.contains_key(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                field_name: ast_field.name.to_string(),
                location: loc::FilePosition::from_pos(
                    file_path,
                    ast_field.position,
                ).into(),
                type_name: type_data.name.to_string(),
            });
        }

        type_data.fields.insert(
            ast_field.name.to_string(),
            Field::from_ast(type_data.name.as_str(), ast_field),
        );
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("The `{type_name}` type defines the `{field_name}` field more than once ({location})")]
    DuplicateFieldDefinition {
        field_name: String,
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("Multiple `schema` definitions declare a query type")]
    DuplicateQueryTypeDefinition {
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {} type `{type_name}` with a {} type extension",
        type_kind.name(),
        extension_kind.name(),
    )]
    InvalidExtensionType {
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Error parsing schema string")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
