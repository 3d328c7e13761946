use crate::ast;
use crate::types::TypeAnnotation;

fn parse_var_type(type_src: &str) -> ast::query::Type {
    let doc = ast::query::parse(
        format!("query Q($v: {type_src}) {{ __typename }}").as_str(),
    ).unwrap();
    match doc.definitions.into_iter().next() {
        Some(ast::query::Definition::Operation(
            ast::query::OperationDefinition::Query(query),
        )) => query.variable_definitions[0].var_type.clone(),
        other => panic!("Unexpected definition: {other:#?}"),
    }
}

#[test]
fn non_null_wrapper_folds_into_nullable_flag() {
    let annot = TypeAnnotation::from_ast_type(&parse_var_type("String!"));
    assert_eq!(annot, TypeAnnotation::named("String", false));
    assert!(!annot.nullable());
}

#[test]
fn nullable_list_of_non_null_items() {
    let annot = TypeAnnotation::from_ast_type(&parse_var_type("[Int!]"));
    assert_eq!(
        annot,
        TypeAnnotation::list(TypeAnnotation::named("Int", false), true),
    );
    assert!(annot.is_list());
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "Int");
}

#[test]
fn nested_lists_keep_per_layer_nullability() {
    let annot = TypeAnnotation::from_ast_type(&parse_var_type("[[ID]!]!"));
    let outer = annot.as_list_annotation().unwrap();
    assert!(!outer.nullable());
    let inner = outer.inner_type_annotation().as_list_annotation().unwrap();
    assert!(!inner.nullable());
    assert!(inner.inner_type_annotation().nullable());
}

#[test]
fn display_prints_graphql_notation() {
    for type_src in ["String", "String!", "[String]", "[String!]!", "[[Foo]!]"] {
        let annot = TypeAnnotation::from_ast_type(&parse_var_type(type_src));
        assert_eq!(annot.to_string(), type_src);
    }
}

#[test]
fn with_nullable_only_touches_outermost_layer() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("Int", true), true);
    let non_null = annot.with_nullable(false);
    assert_eq!(non_null.to_string(), "[Int]!");
    assert_eq!(non_null.with_nullable(true), annot);
}
