use crate::output_utils;
use crate::schema_source::SchemaSource;
use crate::schema_source::expand_home_dir;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use megaera::Generated;
use megaera::Schema;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Path or http(s) URL of the GraphQL schema the documents are \
             checked against. A leading `~` expands to the home directory.",
        long,
    )]
    schema: String,

    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing GraphQL documents to generate TypeScript for.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_source = SchemaSource::from_arg(self.schema.as_str());
        let schema = match schema_source.load().await {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to load the schema: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Loaded {} types from {schema_source}.",
            schema.types().len(),
        );

        let file_or_dir_paths: Vec<PathBuf> =
            self.file_or_dir_paths.iter()
                .map(|path| expand_home_dir(path))
                .collect();
        let file_paths = match find_graphql_files(
            file_or_dir_paths.as_slice(),
            self.graphql_file_exts.as_slice(),
        ) {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Found {} GraphQL documents.", file_paths.len());

        let results: Vec<(&PathBuf, anyhow::Result<Generated>)> =
            file_paths.par_iter()
                .map(|file_path| (file_path, generate_file(&schema, file_path)))
                .collect();

        let mut failures = vec![];
        for (file_path, result) in results {
            log::info!("Processing {}", file_path.display());
            match result {
                Ok(generated) => log::info!(
                    "> done ({}, {})",
                    output_utils::plural(generated.num_operations, "operation", "operations"),
                    output_utils::plural(generated.num_fragments, "fragment", "fragments"),
                ),
                Err(err) => {
                    log::error!("> failed: {err:#}");
                    failures.push(format!("  * {}: {err:#}", file_path.display()));
                },
            }
        }

        if failures.is_empty() {
            CommandResult::stdout(format_args!(
                "{} Generated TypeScript for {}.",
                output_utils::GREEN_CHECK,
                output_utils::plural(file_paths.len(), "document", "documents"),
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} Failed to generate TypeScript for {} of {}:\n{}",
                output_utils::RED_X,
                failures.len(),
                output_utils::plural(file_paths.len(), "document", "documents"),
                failures.join("\n"),
            ))
        }
    }
}

/// Find all GraphQL documents at or under each of `file_or_dir_paths`.
///
/// A single path naming a file is always accepted, even when its extension
/// is not one of `graphql_file_exts`.
pub(crate) fn find_graphql_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut file_paths = vec![];
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to scan `{}`", path.display())
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let matches_ext = entry_path.extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| graphql_file_exts.contains(&*ext));
            if matches_ext {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                file_paths.push(entry_path.to_path_buf());
            }
        }
    }

    if file_paths.is_empty()
        && let [single_path] = file_or_dir_paths
        && single_path.is_file() {
        log::warn!(
            "Proceeding with {single_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(single_path.to_path_buf());
    }

    Ok(file_paths)
}

/// Generate TypeScript for one document and write it alongside the document.
pub(crate) fn generate_file(schema: &Schema, file_path: &Path) -> anyhow::Result<Generated> {
    let document_src = megaera::file_reader::read_content(file_path)?;
    let generated = megaera::generate(schema, document_src.as_str(), Some(file_path))?;

    let output_path = output_path(file_path);
    std::fs::write(&output_path, generated_file_contents(file_path, &generated))
        .with_context(|| format!("Failed to write `{}`", output_path.display()))?;
    Ok(generated)
}

pub(crate) fn generated_file_contents(file_path: &Path, generated: &Generated) -> String {
    let file_name = file_path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    format!(
        "// DO NOT EDIT. This is a generated file. Instead of this file, edit \"{file_name}\".\n\n{}",
        generated.code,
    )
}

/// `queries.graphql` is written to `queries.graphql.ts`.
pub(crate) fn output_path(file_path: &Path) -> PathBuf {
    let mut output_path = file_path.as_os_str().to_os_string();
    output_path.push(".ts");
    PathBuf::from(output_path)
}
