//! Token source loading
//!
//! [`TokenSource`] pairs a parsed token tree with the path it came from; the path drives
//! classification, so it is kept exactly as the caller names it (normally relative to the
//! project root).
//!
//! Loading many files is best-effort: [`SourceLoader::load_all`] returns a [`LoadReport`] with
//! every source that parsed and every one that did not. A bad file is logged and left out, it
//! never stops the rest of the build.

use crate::flatten::{flatten_from, TokenMap};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a token file could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token file root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// A parsed token file.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSource {
    pub path: PathBuf,
    pub tree: Value,
}

impl TokenSource {
    /// Read and parse a file, using its path as given.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json_str(path, &text)
    }

    /// Parse source text that claims to come from `path`.
    pub fn from_json_str<P: AsRef<Path>>(path: P, text: &str) -> Result<Self, LoadError> {
        let tree: Value = serde_json::from_str(text)?;
        if !tree.is_object() {
            return Err(LoadError::NotAnObject(json_kind(&tree)));
        }
        Ok(TokenSource {
            path: path.as_ref().to_path_buf(),
            tree,
        })
    }

    pub fn flatten(&self) -> TokenMap {
        flatten_from::<&str>(&self.tree, &[], &self.path)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A file that was left out of the build.
#[derive(Debug)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub error: LoadError,
}

/// Outcome of loading a set of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub sources: Vec<TokenSource>,
    pub skipped: Vec<SkippedSource>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Loads token files relative to a root directory.
///
/// Sources are labelled with their root-relative path, so that classification sees
/// `tokens/base/dark.json` and not whatever directory the project happens to live in.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    root: PathBuf,
}

impl SourceLoader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        SourceLoader {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load one file given relative to the root.
    pub fn load<P: AsRef<Path>>(&self, relative: P) -> Result<TokenSource, LoadError> {
        let relative = relative.as_ref();
        let text = fs::read_to_string(self.root.join(relative))?;
        TokenSource::from_json_str(relative, &text)
    }

    /// Load every file, skipping (and logging) those that fail.
    pub fn load_all<I, P>(&self, paths: I) -> LoadReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();
        for path in paths {
            let path = path.as_ref();
            match self.load(path) {
                Ok(source) => {
                    debug!(path = %path.display(), "loaded token source");
                    report.sources.push(source);
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping token source");
                    report.skipped.push(SkippedSource {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }
        report
    }
}
