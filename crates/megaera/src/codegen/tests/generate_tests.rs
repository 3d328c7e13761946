use crate::codegen::CodegenError;
use crate::codegen::generate;
use crate::emitter::GenerationError;
use crate::resolver::DocumentError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

const SCHEMA_SRC: &str = concat!(
    "type Query { user(login: String!): User, search(term: String): [SearchResult!]! }\n",
    "type User { login: String!, age: Int, birthday: Date!, gender: Gender }\n",
    "type Bot { login: String!, active: Boolean! }\n",
    "scalar Date\n",
    "enum Gender { MALE FEMALE }\n",
    "union SearchResult = User | Bot\n",
);

fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, SCHEMA_SRC)
        .and_then(|builder| builder.build())
        .unwrap()
}

#[test]
fn generates_typed_queries() -> Result<(), CodegenError> {
    let schema = test_schema();
    let generated = generate(&schema, concat!(
        "fragment Person on User { age birthday gender }\n",
        "query User($login: String! = \"x\") {\n",
        "  user(login: $login) { login ...Person }\n",
        "}\n",
    ), None)?;

    assert_eq!(generated.num_fragments, 1);
    assert_eq!(generated.num_operations, 1);

    let code = generated.code;
    assert!(code.starts_with("const Person = `#graphql\nfragment Person on User"));
    assert!(code.contains(concat!(
        "export type Person = {\n",
        "  age: number | null\n",
        "  birthday: string\n",
        "  gender: 'MALE' | 'FEMALE'\n",
        "}\n",
    )));
    assert!(code.contains("export const User = `#graphql\n${Person}\nquery User("));
    assert!(code.contains("` as string & User\n"));
    assert!(code.ends_with(concat!(
        "export type User = (vars: { login?: string }) => {\n",
        "  user: {\n",
        "    login: string\n",
        "  } & Person | null\n",
        "}\n",
    )));

    Ok(())
}

#[test]
fn generates_union_alternations() -> Result<(), CodegenError> {
    let schema = test_schema();
    let generated = generate(&schema, concat!(
        "query Search($term: String) {\n",
        "  search(term: $term) {\n",
        "    ... on User { age }\n",
        "    ... on Bot { active }\n",
        "  }\n",
        "}\n",
    ), None)?;

    assert!(generated.code.ends_with(concat!(
        "export type Search = (vars: { term?: string | null }) => {\n",
        "  search: Array<(\n",
        "    | {\n",
        "      age: number | null\n",
        "    }\n",
        "    | {\n",
        "      active: boolean\n",
        "    }\n",
        "  )>\n",
        "}\n",
    )));

    Ok(())
}

#[test]
fn document_errors_abort_generation() {
    let schema = test_schema();
    let err = generate(&schema, concat!(
        "fragment Dup on User { login }\n",
        "query Dup { user(login: \"x\") { login } }\n",
    ), None).unwrap_err();

    assert!(matches!(
        err,
        CodegenError::Document(DocumentError::DuplicateDefinition { ref name, .. })
            if name == "Dup",
    ));
}

#[test]
fn generation_errors_abort_generation() {
    let schema = test_schema();
    let err = generate(
        &schema,
        "query Q { user(login: \"x\") { ...Missing } }",
        None,
    ).unwrap_err();

    assert_eq!(err, CodegenError::Generation(GenerationError::UndefinedFragment {
        fragment_name: "Missing".to_string(),
        referrer: "user".to_string(),
    }));
}
