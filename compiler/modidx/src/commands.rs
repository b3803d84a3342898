//! Command handlers for the `modidx` CLI.

use std::path::Path;

use modidx_resolve::{IndexConfig, ModuleIndex};
use rayon::prelude::*;

use crate::input::{index_path, InputError};

/// Options for one `modidx` invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Tree files to index, in output order.
    pub paths: Vec<String>,
    pub config: IndexConfig,
    /// Indent the JSON output.
    pub pretty: bool,
}

/// Parse everything after the program name.
///
/// Options may appear before or after the paths.
pub fn parse_index_options(args: &[String]) -> Result<IndexOptions, String> {
    let mut options = IndexOptions::default();
    for arg in args {
        if let Some(root) = arg.strip_prefix("--project-root=") {
            if root.is_empty() {
                return Err("--project-root needs a directory name".to_string());
            }
            options.config.project_root = root.to_string();
        } else if arg == "--pretty" {
            options.pretty = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.paths.push(arg.clone());
        }
    }
    if options.paths.is_empty() {
        return Err("missing tree file".to_string());
    }
    Ok(options)
}

/// An input that failed, with the path it came from.
#[derive(Debug, thiserror::Error)]
#[error("{path}: {source}")]
pub struct IndexError {
    pub path: String,
    #[source]
    pub source: InputError,
}

/// Index one file.
pub fn index_file(path: &str, config: &IndexConfig) -> Result<ModuleIndex, IndexError> {
    let index = index_path(Path::new(path), config).map_err(|source| IndexError {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(
        path,
        modules = index.modules.len(),
        importers = index.imports.len(),
        "indexed"
    );
    Ok(index)
}

/// Index every file, independently and in parallel. Results keep input order.
pub fn index_all(options: &IndexOptions) -> Vec<Result<ModuleIndex, IndexError>> {
    options
        .paths
        .par_iter()
        .map(|path| index_file(path, &options.config))
        .collect()
}

/// JSON for the indices: a single object for one input, an array otherwise.
pub fn render(indices: &[ModuleIndex], pretty: bool) -> Result<String, serde_json::Error> {
    match (indices, pretty) {
        ([single], false) => serde_json::to_string(single),
        ([single], true) => serde_json::to_string_pretty(single),
        (many, false) => serde_json::to_string(many),
        (many, true) => serde_json::to_string_pretty(many),
    }
}

/// Index the files and print the result to stdout.
///
/// Reports every failing input before exiting with status 1; nothing is
/// printed to stdout unless all inputs succeed.
pub fn run_index(options: &IndexOptions) {
    let mut indices = Vec::with_capacity(options.paths.len());
    let mut failed = false;
    for result in index_all(options) {
        match result {
            Ok(index) => indices.push(index),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }

    match render(&indices, options.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: cannot serialize index: {e}");
            std::process::exit(1);
        }
    }
}
