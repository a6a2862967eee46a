//! Loading a directory of match records.

use crate::errors::{self, LoadFailure, Result};
use crate::input::Document;
use itertools::Itertools;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name suffix of match records.
pub const DEFAULT_SUFFIX: &str = "yaml";

/// What to do with a document that cannot be read or parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave it out of the corpus.
    #[default]
    Skip,
    /// Keep a zero-valued document with only the id set.
    Placeholder,
}

pub struct LoadOptions<'a> {
    /// File name suffix, without the dot.
    pub suffix: &'a str,
    pub policy: FailurePolicy,
}

impl Default for LoadOptions<'_> {
    fn default() -> Self {
        LoadOptions {
            suffix: DEFAULT_SUFFIX,
            policy: FailurePolicy::Skip,
        }
    }
}

/// All documents of one directory, in file name order.
#[derive(Debug, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub failures: Vec<LoadFailure>,
}

/// Document id for a file name: everything before the first dot.
pub fn document_id(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

/// Parse one document from its text.
pub fn parse_document(id: &str, text: &str) -> Result<Document> {
    let mut doc: Document = serde_yaml::from_str(text)?;
    doc.id = id.to_owned();
    Ok(doc)
}

fn read_document(id: &str, path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)?;
    parse_document(id, &text)
}

fn list_dir(dir: &Path, suffix: &str) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(errors::invalid_input(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    let ending = format!(".{suffix}");
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(target: "crictab", "skip: {}", path.display());
            continue;
        };
        if name.ends_with(&ending) && path.is_file() {
            files.push((name, path));
        } else {
            debug!(target: "crictab", "skip: {}", path.display());
        }
    }
    Ok(files.into_iter().sorted().collect_vec())
}

/// Load every matching file in `dir`.
///
/// Only an unreadable directory is an error. Documents that fail to load are
/// reported in [Corpus::failures] and handled according to [LoadOptions::policy].
pub fn load_dir(dir: &Path, options: &LoadOptions) -> Result<Corpus> {
    info!(target: "crictab", "read: {}", dir.display());
    let files = list_dir(dir, options.suffix)?;
    info!(target: "crictab", "files: {}", files.len());
    let mut corpus = Corpus::default();
    for (name, path) in files {
        let id = document_id(&name);
        match read_document(id, &path) {
            Ok(doc) => corpus.documents.push(doc),
            Err(e) => {
                let failure = LoadFailure {
                    file: path.display().to_string(),
                    error: format!("{e}"),
                };
                warn!(target: "crictab", "{failure}");
                corpus.failures.push(failure);
                if options.policy == FailurePolicy::Placeholder {
                    corpus.documents.push(Document {
                        id: id.to_owned(),
                        ..Document::default()
                    });
                }
            }
        }
    }
    Ok(corpus)
}
