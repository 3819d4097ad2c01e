use crate::schema::SchemaError;
use crate::schema::SchemaModel;
use crate::schema::SchemaModelBuilder;

fn build_schema(src: &str) -> SchemaModel {
    SchemaModelBuilder::new()
        .load_str(None, src)
        .unwrap()
        .build()
        .unwrap()
}

fn sample_schema() -> SchemaModel {
    build_schema(r#"
        type Query {
            user(id: ID!): User
            users: [User!]!
            search(term: String): [SearchResult]
            ghost: Phantom
        }

        type User {
            id: ID!
            name: String!
            role: Role
        }

        type Hoge {
            id: ID!
        }

        union SearchResult = User | Hoge

        enum Role { ADMIN GUEST }
    "#)
}

// =============================================================================
// fields_of
// =============================================================================

#[test]
fn fields_of_object_type() {
    let schema = sample_schema();

    let fields = schema.fields_of("User").unwrap();
    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["id", "name", "role"]);
}

#[test]
fn fields_of_unknown_type() {
    let schema = sample_schema();

    assert_eq!(
        schema.fields_of("Nope"),
        Err(SchemaError::UnknownType { type_name: "Nope".to_string() }),
    );
}

#[test]
fn fields_of_leaf_and_union_types() {
    let schema = sample_schema();

    assert!(matches!(
        schema.fields_of("Role"),
        Err(SchemaError::LeafType { kind: "Enum", .. }),
    ));
    assert!(matches!(
        schema.fields_of("SearchResult"),
        Err(SchemaError::LeafType { kind: "Union", .. }),
    ));
    assert!(matches!(
        schema.fields_of("String"),
        Err(SchemaError::LeafType { kind: "String", .. }),
    ));
}

// =============================================================================
// root_fields
// =============================================================================

#[test]
fn root_fields_in_declaration_order() {
    let schema = sample_schema();

    let root_fields = schema.root_fields().unwrap();
    assert_eq!(
        root_fields.keys().collect::<Vec<_>>(),
        vec!["user", "users", "search", "ghost"],
    );
}

#[test]
fn root_fields_without_query_type() {
    let schema = build_schema("type User { id: ID! }");

    assert_eq!(schema.root_fields(), Err(SchemaError::NoRootType));
}

#[test]
fn root_fields_when_declared_query_type_is_missing() {
    let schema = build_schema("schema { query: Root }\ntype User { id: ID! }");

    assert_eq!(schema.query_type_name(), Some("Root"));
    assert_eq!(schema.root_fields(), Err(SchemaError::NoRootType));
}

// =============================================================================
// resolve_return_type
// =============================================================================

#[test]
fn resolve_return_type_strips_wrappers() {
    let schema = sample_schema();
    let root_fields = schema.root_fields().unwrap();

    assert_eq!(schema.resolve_return_type(&root_fields["user"]), Ok("User"));
    assert_eq!(schema.resolve_return_type(&root_fields["users"]), Ok("User"));
    assert_eq!(schema.resolve_return_type(&root_fields["search"]), Ok("SearchResult"));
}

#[test]
fn resolve_return_type_of_leaf_fields() {
    let schema = sample_schema();
    let user_fields = schema.fields_of("User").unwrap();

    assert_eq!(schema.resolve_return_type(&user_fields["id"]), Ok("ID"));
    assert_eq!(schema.resolve_return_type(&user_fields["role"]), Ok("Role"));
}

#[test]
fn resolve_return_type_of_undeclared_type() {
    let schema = sample_schema();
    let root_fields = schema.root_fields().unwrap();

    assert_eq!(
        schema.resolve_return_type(&root_fields["ghost"]),
        Err(SchemaError::InvalidFieldType {
            field_name: "ghost".to_string(),
            parent_type_name: "Query".to_string(),
            return_type_name: "Phantom".to_string(),
        }),
    );
}

// =============================================================================
// is_composite_type
// =============================================================================

#[test]
fn composite_types() {
    let schema = sample_schema();

    assert!(schema.is_composite_type("User"));
    assert!(schema.is_composite_type("SearchResult"));
    assert!(!schema.is_composite_type("Role"));
    assert!(!schema.is_composite_type("ID"));
    assert!(!schema.is_composite_type("Phantom"));
}
