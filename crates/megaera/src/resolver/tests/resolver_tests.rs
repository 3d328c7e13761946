use crate::content::Selection;
use crate::content::Selector;
use crate::content::Variable;
use crate::loc;
use crate::OperationKind;
use crate::resolver::DocumentError;
use crate::resolver::resolve_str;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, DocumentError>;

const SCHEMA_SRC: &str = concat!(
    "type Query { me: User, user(login: String!): User, search: [SearchResult!]! }\n",
    "type Mutation { follow(login: String!, notify: Boolean): User! }\n",
    "type User { login: String!, name: String, friends: [User!] }\n",
    "type Org { login: String!, members: Int }\n",
    "union SearchResult = User | Org\n",
);

fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, SCHEMA_SRC)
        .and_then(|builder| builder.build())
        .unwrap()
}

fn field(selection: &Selection) -> &Selector {
    match selection {
        Selection::Field(selector) => selector,
        Selection::FragmentRef(name) => panic!("Expected a field, found `...{name}`"),
    }
}

fn position(line: usize, col: usize) -> loc::FilePosition {
    loc::FilePosition { col, file: Some(PathBuf::from("doc.graphql")), line }
}

#[test]
fn operations_keep_declaration_order() -> Result<()> {
    let schema = test_schema();
    let content = resolve_str(&schema, concat!(
        "query Second { me { login } }\n",
        "mutation First($login: String!) { follow(login: $login) { login } }\n",
    ), None)?;

    assert_eq!(
        content.operations.iter().map(|op| (op.name(), op.kind)).collect::<Vec<_>>(),
        vec![("Second", OperationKind::Query), ("First", OperationKind::Mutation)],
    );
    assert!(content.fragments.is_empty());

    Ok(())
}

#[test]
fn selectors_mirror_the_selection_set() -> Result<()> {
    let schema = test_schema();
    let content = resolve_str(
        &schema,
        "query Me { me { handle: login name friends { login } } }",
        None,
    )?;

    let operation = &content.operations[0];
    assert!(operation.source.starts_with("query Me"));
    assert!(operation.source.contains("handle: login"));
    assert_eq!(operation.selector.name, "Me");
    assert_eq!(operation.selector.output_type, Some(TypeAnnotation::named("Query", true)));

    let me = field(&operation.selector.fields[0]);
    assert_eq!(me.name, "me");
    assert_eq!(me.output_type, Some(TypeAnnotation::named("User", true)));
    assert_eq!(
        me.fields.iter().map(|f| field(f).name.as_str()).collect::<Vec<_>>(),
        vec!["handle", "name", "friends"],
    );

    let handle = field(&me.fields[0]);
    assert_eq!(handle.output_type, Some(TypeAnnotation::named("String", false)));
    assert!(handle.is_leaf());

    let friends = field(&me.fields[2]);
    assert_eq!(
        friends.output_type,
        Some(TypeAnnotation::list(TypeAnnotation::named("User", false), true)),
    );
    assert_eq!(friends.fields.len(), 1);

    Ok(())
}

#[test]
fn fragment_spreads_are_references() -> Result<()> {
    let schema = test_schema();
    let content = resolve_str(&schema, concat!(
        "fragment UserFields on User { login name }\n",
        "query Me { me { ...UserFields friends { ...UserFields } } }\n",
    ), None)?;

    let fragment = &content.fragments["UserFields"];
    assert_eq!(fragment.type_condition, "User");
    assert_eq!(fragment.selector.output_type, Some(TypeAnnotation::named("User", true)));
    assert_eq!(fragment.selector.fields.len(), 2);
    assert!(fragment.source.starts_with("fragment UserFields on User"));

    let me = field(&content.operations[0].selector.fields[0]);
    assert_eq!(me.fields[0], Selection::FragmentRef("UserFields".to_string()));
    assert_eq!(
        field(&me.fields[1]).fields,
        vec![Selection::FragmentRef("UserFields".to_string())],
    );

    Ok(())
}

#[test]
fn inline_fragments_become_alternatives() -> Result<()> {
    let schema = test_schema();
    let content = resolve_str(&schema, concat!(
        "query Search { search {\n",
        "  __typename\n",
        "  ... on User { name }\n",
        "  ... on Org { members }\n",
        "} }\n",
    ), None)?;

    let search = field(&content.operations[0].selector.fields[0]);
    assert_eq!(search.fields.len(), 1);
    assert_eq!(
        search.inline_fragments.iter()
            .map(|branch| (branch.name.as_str(), branch.output_type.clone()))
            .collect::<Vec<_>>(),
        vec![
            ("User", Some(TypeAnnotation::named("User", false))),
            ("Org", Some(TypeAnnotation::named("Org", false))),
        ],
    );
    assert_eq!(field(&search.inline_fragments[1].fields[0]).name, "members");

    Ok(())
}

#[test]
fn variables_with_defaults_are_optional() -> Result<()> {
    let schema = test_schema();
    let content = resolve_str(&schema, concat!(
        "mutation Follow($login: String! = \"x\", $notify: Boolean, $id: ID!, $who: Who) {\n",
        "  follow(login: $login, notify: $notify) { login }\n",
        "}\n",
    ), None)?;

    assert_eq!(content.operations[0].variables, vec![
        Variable {
            name: "login".to_string(),
            var_type: Some(TypeAnnotation::named("String", false)),
            required: false,
        },
        Variable {
            name: "notify".to_string(),
            var_type: Some(TypeAnnotation::named("Boolean", true)),
            required: false,
        },
        Variable {
            name: "id".to_string(),
            var_type: Some(TypeAnnotation::named("ID", false)),
            required: true,
        },
        Variable {
            name: "who".to_string(),
            var_type: None,
            required: false,
        },
    ]);

    Ok(())
}

#[test]
fn duplicate_operation_names() {
    let schema = test_schema();
    let err = resolve_str(&schema, concat!(
        "query Me { me { login } }\n",
        "query Me { me { name } }\n",
    ), Some(Path::new("doc.graphql"))).unwrap_err();

    assert_eq!(err, DocumentError::DuplicateDefinition {
        name: "Me".to_string(),
        first_location: position(1, 1),
        second_location: position(2, 1),
    });
}

#[test]
fn operation_and_fragment_names_share_one_namespace() {
    let schema = test_schema();

    let err = resolve_str(&schema, concat!(
        "query Me { me { login } }\n",
        "fragment Me on User { name }\n",
    ), Some(Path::new("doc.graphql"))).unwrap_err();
    assert_eq!(err, DocumentError::DuplicateDefinition {
        name: "Me".to_string(),
        first_location: position(1, 1),
        second_location: position(2, 1),
    });

    let err = resolve_str(&schema, concat!(
        "fragment Me on User { name }\n",
        "\n",
        "query Me { me { login } }\n",
    ), Some(Path::new("doc.graphql"))).unwrap_err();
    assert_eq!(err, DocumentError::DuplicateDefinition {
        name: "Me".to_string(),
        first_location: position(1, 1),
        second_location: position(3, 1),
    });
}

#[test]
fn anonymous_operations_are_rejected() {
    let schema = test_schema();

    let err = resolve_str(&schema, "query { me { login } }", None).unwrap_err();
    assert_eq!(err, DocumentError::MissingName {
        kind: OperationKind::Query,
        location: loc::FilePosition { col: 1, file: None, line: 1 },
    });

    let err = resolve_str(&schema, "{ me { login } }", None).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::MissingName { kind: OperationKind::Query, .. },
    ));
}

#[test]
fn inline_fragments_need_a_type_condition() {
    let schema = test_schema();
    let err = resolve_str(
        &schema,
        "query Q { me { ... { name } } }",
        Some(Path::new("doc.graphql")),
    ).unwrap_err();

    assert_eq!(err, DocumentError::MissingTypeCondition {
        location: position(1, 16),
    });
}

#[test]
fn syntax_errors_name_the_document() {
    let schema = test_schema();
    let err = resolve_str(
        &schema,
        "query Q { me { ",
        Some(Path::new("doc.graphql")),
    ).unwrap_err();

    assert!(matches!(
        err,
        DocumentError::ParseError { file: Some(ref file), .. }
            if file == Path::new("doc.graphql"),
    ));
}
