use crate::commands::generate::find_graphql_files;
use crate::commands::generate::generate_file;
use crate::commands::generate::output_path;
use megaera::CodegenError;
use megaera::Schema;
use megaera::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, "type Query { me: User }\ntype User { login: String! }")
        .and_then(|builder| builder.build())
        .unwrap()
}

fn write(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}

fn default_exts() -> Vec<String> {
    vec!["graphql".to_string(), "gql".to_string()]
}

#[test]
fn output_path_appends_ts() {
    assert_eq!(
        output_path(Path::new("src/queries.graphql")),
        PathBuf::from("src/queries.graphql.ts"),
    );
}

#[test]
fn finds_graphql_files_recursively_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    write(&dir.path().join("b.gql"), "");
    write(&dir.path().join("a.graphql"), "");
    write(&dir.path().join("c.txt"), "");
    write(&dir.path().join("sub/d.graphql"), "");

    let found = find_graphql_files(&[dir.path().to_path_buf()], &default_exts()).unwrap();

    assert_eq!(found, vec![
        dir.path().join("a.graphql"),
        dir.path().join("b.gql"),
        dir.path().join("sub/d.graphql"),
    ]);
}

#[test]
fn extensions_may_be_given_with_a_leading_dot() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("a.graphql"), "");
    write(&dir.path().join("b.gql"), "");

    let found = find_graphql_files(
        &[dir.path().to_path_buf()],
        &[".gql".to_string()],
    ).unwrap();

    assert_eq!(found, vec![dir.path().join("b.gql")]);
}

#[test]
fn a_single_explicit_file_is_always_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("queries.txt");
    write(&file_path, "");

    let found = find_graphql_files(&[file_path.clone()], &default_exts()).unwrap();

    assert_eq!(found, vec![file_path]);
}

#[test]
fn missing_paths_are_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = find_graphql_files(&[dir.path().join("nope")], &default_exts());

    assert!(result.is_err());
}

#[test]
fn writes_the_generated_file_next_to_the_document() {
    let schema = test_schema();
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("me.graphql");
    write(&file_path, "query Me { me { login } }\n");

    let generated = generate_file(&schema, &file_path).unwrap();
    assert_eq!(generated.num_operations, 1);
    assert_eq!(generated.num_fragments, 0);

    let written = std::fs::read_to_string(dir.path().join("me.graphql.ts")).unwrap();
    assert!(written.starts_with(concat!(
        "// DO NOT EDIT. This is a generated file. Instead of this file, edit \"me.graphql\".\n",
        "\n",
        "export const Me = `#graphql\n",
    )));
    assert!(written.ends_with(concat!(
        "export type Me = () => {\n",
        "  me: {\n",
        "    login: string\n",
        "  } | null\n",
        "}\n",
    )));
}

#[test]
fn failing_documents_write_nothing() {
    let schema = test_schema();
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("anon.graphql");
    write(&file_path, "{ me { login } }\n");

    let err = generate_file(&schema, &file_path).unwrap_err();

    assert!(matches!(err.downcast_ref::<CodegenError>(), Some(CodegenError::Document(_))));
    assert!(!dir.path().join("anon.graphql.ts").exists());
}
