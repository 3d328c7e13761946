use crate::content::Content;
use crate::content::Fragment;
use crate::content::Selector;
use crate::emitter::GenerationError;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;

fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, "type Query { me: User }\ntype User { name: String }")
        .and_then(|builder| builder.build())
        .unwrap()
}

fn fragment(selector: Selector) -> Fragment {
    Fragment {
        selector,
        type_condition: "User".to_string(),
        source: "fragment F on User { name }".to_string(),
        def_location: loc::FilePosition { col: 1, file: None, line: 1 },
    }
}

fn user(name: &str) -> Selector {
    Selector::new(name, Some(TypeAnnotation::named("User", true)))
}

#[test]
fn dependencies_follow_fragment_declaration_order() {
    let schema = test_schema();
    let mut content = Content::new(&schema);
    content.insert_fragment(fragment(user("B")));
    content.insert_fragment(fragment(user("Unused")));
    content.insert_fragment(fragment(user("A").with_fragment_ref("B")));

    let root = Selector::new("Q", Some(TypeAnnotation::named("Query", true)))
        .with_field(user("me").with_fragment_ref("A"));

    assert_eq!(content.fragment_dependencies(&root).unwrap(), vec!["B", "A"]);
}

#[test]
fn dependencies_are_collected_through_inline_fragments() {
    let schema = test_schema();
    let mut content = Content::new(&schema);
    content.insert_fragment(fragment(user("A")));

    let root = Selector::new("Q", None)
        .with_inline_fragment(user("User").with_fragment_ref("A"));

    assert_eq!(content.fragment_dependencies(&root).unwrap(), vec!["A"]);
}

#[test]
fn cyclic_dependencies_are_listed_once() {
    let schema = test_schema();
    let mut content = Content::new(&schema);
    content.insert_fragment(fragment(user("A").with_fragment_ref("B")));
    content.insert_fragment(fragment(user("B").with_fragment_ref("A")));

    let root = Selector::new("Q", None)
        .with_fragment_ref("A")
        .with_fragment_ref("A");

    assert_eq!(content.fragment_dependencies(&root).unwrap(), vec!["A", "B"]);
}

#[test]
fn undefined_fragments_are_an_error() {
    let schema = test_schema();
    let mut content = Content::new(&schema);
    content.insert_fragment(fragment(user("A").with_fragment_ref("Missing")));

    let root = Selector::new("Q", None).with_field(user("me").with_fragment_ref("A"));

    assert_eq!(
        content.fragment_dependencies(&root),
        Err(GenerationError::UndefinedFragment {
            fragment_name: "Missing".to_string(),
            referrer: "A".to_string(),
        }),
    );
}

#[test]
fn leaf_selectors() {
    assert!(user("me").is_leaf());
    assert!(!user("me").with_fragment_ref("A").is_leaf());
    assert_eq!(
        user("me")
            .with_fragment_ref("A")
            .with_field(user("friend").with_fragment_ref("Nested"))
            .with_fragment_ref("B")
            .fragment_refs()
            .collect::<Vec<_>>(),
        vec!["A", "B"],
    );
}
