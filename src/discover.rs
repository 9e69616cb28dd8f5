//! Token file discovery.

use glob::{Pattern, PatternError};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("invalid source pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("{} matched outside the project root {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Expand `patterns` under `root`.
///
/// Returned paths are relative to `root`, sorted and free of duplicates, so a file matched by
/// two patterns is loaded once. Entries that cannot be read are logged and skipped.
pub fn discover<S: AsRef<str>>(
    root: &Path,
    patterns: &[S],
) -> Result<Vec<PathBuf>, DiscoverError> {
    // glob yields paths without `.` components; the prefix to strip must match.
    let root = without_cur_dir(root);
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut found = BTreeSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let full_pattern = if root.as_os_str().is_empty() {
            pattern.to_string()
        } else {
            format!("{}/{}", escaped_root.trim_end_matches('/'), pattern)
        };

        for entry in glob::glob(&full_pattern)? {
            match entry {
                Ok(path) if path.is_file() => {
                    let path = without_cur_dir(&path);
                    let relative = path
                        .strip_prefix(&root)
                        .map_err(|_| DiscoverError::OutsideRoot {
                            path: path.clone(),
                            root: root.clone(),
                        })?;
                    found.insert(relative.to_path_buf());
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(
                        path = %error.path().display(),
                        error = %error.error(),
                        "skipping unreadable entry"
                    );
                }
            }
        }
    }

    debug!(count = found.len(), "discovered token files");
    Ok(found.into_iter().collect())
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
