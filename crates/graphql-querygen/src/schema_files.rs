use anyhow::Context;
use libgraphql_querygen::schema::SchemaModel;
use libgraphql_querygen::schema::SchemaModelBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where to find the schema, shared by every command that needs one.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="SCHEMA_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}
impl SchemaArgs {
    pub(crate) fn load(&self) -> anyhow::Result<SchemaModel> {
        let file_paths = self.find_schema_files()?;
        log::debug!("Loading {} schema file(s).", file_paths.len());

        let schema = SchemaModelBuilder::new()
            .load_files(file_paths)?
            .build()?;
        Ok(schema)
    }

    /// Every schema file at or under each of the `SCHEMA_PATHS`.
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} input paths...", self.schema_paths.len());
        let mut file_paths = vec![];
        for path in &self.schema_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan schema files at/under {}",
                    path.display(),
                ))?;

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()));
                if has_graphql_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single file given explicitly is loaded even if its extension
        // isn't one of the --graphql-file-exts.
        if let [single_path] = self.schema_paths.as_slice()
            && file_paths.is_empty()
            && single_path.is_file() {
            log::warn!(
                "Loading {single_path:#?} even though it doesn't match any of \
                the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(single_path.clone());
        }

        if file_paths.is_empty() {
            anyhow::bail!("No GraphQL schema files found");
        }
        Ok(file_paths)
    }
}
