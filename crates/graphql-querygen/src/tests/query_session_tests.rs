use crate::edit_args::EditArgs;
use crate::query_session::QuerySession;
use libgraphql_querygen::document::QueryDocument;
use libgraphql_querygen::transform::TransformEngine;

fn session(query_src: &str) -> QuerySession {
    QuerySession::new(QueryDocument::parse(query_src).unwrap(), TransformEngine::new())
}

#[test]
fn applies_selection_then_arguments() {
    let mut session = session("query($id: ID!) { user(id: $id) { id name } }");
    let edits = EditArgs {
        arguments: vec!["id=abc".to_string()],
        selected_fields: Some(vec!["id".to_string()]),
        ..Default::default()
    };

    session.apply_edits(&edits).unwrap();

    assert_eq!(
        session.document().to_string(),
        "query($id: ID! = \"abc\") {\n  user(id: $id) {\n    id\n  }\n}\n",
    );
}

#[test]
fn scoped_selection() {
    let mut session = session("query { user { id friends { id name } } }");
    let edits = EditArgs {
        at_path: Some("user.friends".to_string()),
        selected_fields: Some(vec!["name".to_string()]),
        ..Default::default()
    };

    session.apply_edits(&edits).unwrap();

    assert_eq!(
        session.document().to_string(),
        "query {\n  user {\n    id\n    friends {\n      name\n    }\n  }\n}\n",
    );
}

#[test]
fn failed_edit_is_an_error() {
    let mut session = session("query($n: Int) { users(first: $n) { id } }");
    let edits = EditArgs {
        arguments: vec!["first=lots".to_string()],
        ..Default::default()
    };

    assert!(session.apply_edits(&edits).is_err());
}

#[test]
fn rename_and_clear() {
    let mut session = session("query { user { id } }");

    session.rename("GetUser").unwrap();
    assert_eq!(session.document().operation().name(), Some("GetUser"));

    session.rename("").unwrap();
    assert_eq!(session.document().operation().name(), None);

    assert!(session.rename("not valid").is_err());
}
