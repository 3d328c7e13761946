use crate::schema_source::SchemaSource;
use crate::schema_source::expand_home_dir;
use std::path::PathBuf;

#[test]
fn urls_and_files() {
    assert_eq!(
        SchemaSource::from_arg("https://example.com/schema.graphql"),
        SchemaSource::Url("https://example.com/schema.graphql".to_string()),
    );
    assert_eq!(
        SchemaSource::from_arg("http://localhost:4000/graphql"),
        SchemaSource::Url("http://localhost:4000/graphql".to_string()),
    );
    assert_eq!(
        SchemaSource::from_arg("schema/github.graphql"),
        SchemaSource::File(PathBuf::from("schema/github.graphql")),
    );
}

#[test]
fn home_dir_expansion() {
    assert_eq!(expand_home_dir("schema.graphql"), PathBuf::from("schema.graphql"));
    assert_eq!(expand_home_dir("/abs/schema.graphql"), PathBuf::from("/abs/schema.graphql"));

    if let Some(home_dir) = dirs::home_dir() {
        assert_eq!(
            expand_home_dir("~/schemas/github.graphql"),
            home_dir.join("schemas/github.graphql"),
        );
    }
}

#[tokio::test]
async fn loads_schemas_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.graphql");
    std::fs::write(&schema_path, "type Query { ok: Boolean }").unwrap();

    let schema = SchemaSource::File(schema_path).load().await.unwrap();

    assert!(schema.lookup_type("Query").is_some());
}

#[tokio::test]
async fn missing_schema_files_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();

    let result = SchemaSource::File(dir.path().join("nope.graphql")).load().await;

    assert!(result.is_err());
}
