use crate::error::FormatError;
use crate::format::FormatInput;
use crate::registry::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct PublishRequest<'a> {
    pub input: FormatInput<'a>,
    pub format: &'a str,
    pub output: Option<PathBuf>,
}

impl<'a> PublishRequest<'a> {
    pub fn new(input: FormatInput<'a>, format: &'a str) -> Self {
        Self {
            input,
            format,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
    /// Number of tokens handed to the format.
    pub token_count: usize,
}

pub fn publish(
    registry: &FormatRegistry,
    request: PublishRequest<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.render(request.format, &request.input)?;
    let token_count = request.input.tokens.len();
    let artifact = match request.output {
        Some(path) => {
            write_to_path(&path, text.as_bytes())?;
            info!(
                path = %path.display(),
                format = request.format,
                tokens = token_count,
                "wrote stylesheet"
            );
            PublishArtifact::File(path)
        }
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult {
        artifact,
        token_count,
    })
}

fn write_to_path(path: &Path, bytes: &[u8]) -> Result<(), FormatError> {
    let io_error = |source: std::io::Error| FormatError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, bytes).map_err(io_error)
}
