//! Configuration-driven builds.
//!
//! A build discovers token files, loads them into one [`Dictionary`], then renders every file of
//! every platform. Source files that fail to load are reported, not fatal; a bad pattern, an
//! unknown format or a failed write stops the build.

use crate::discover::{discover, DiscoverError};
use dtcss_config::{DtcssConfig, FileConfig};
use dtcss_formats::{
    publish, FormatError, FormatInput, FormatOptions, FormatRegistry, PublishArtifact,
    PublishRequest,
};
use dtcss_parser::{Dictionary, SkippedSource, SourceLoader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error("platform '{platform}', file '{destination}': {source}")]
    Format {
        platform: String,
        destination: String,
        #[source]
        source: FormatError,
    },
}

/// One file written by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArtifact {
    pub platform: String,
    pub format: String,
    pub path: PathBuf,
    pub token_count: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Root-relative paths of every source that was loaded.
    pub sources: Vec<PathBuf>,
    pub skipped: Vec<SkippedSource>,
    pub artifacts: Vec<BuiltArtifact>,
}

impl BuildReport {
    pub fn token_files(&self) -> usize {
        self.sources.len()
    }
}

/// A build of one project.
pub struct Build<'a> {
    config: &'a DtcssConfig,
    root: PathBuf,
    registry: FormatRegistry,
}

impl<'a> Build<'a> {
    pub fn new(config: &'a DtcssConfig, root: impl AsRef<Path>) -> Self {
        Build {
            config,
            root: root.as_ref().to_path_buf(),
            registry: FormatRegistry::with_defaults(),
        }
    }

    /// Use a custom registry, e.g. one with additional formats.
    pub fn with_registry(mut self, registry: FormatRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Load every source into one dictionary.
    pub fn load(&self) -> Result<(Dictionary, Vec<PathBuf>, Vec<SkippedSource>), BuildError> {
        let paths = discover(&self.root, &self.config.source.include)?;
        let report = SourceLoader::new(&self.root).load_all(&paths);
        let sources = report.sources.iter().map(|s| s.path.clone()).collect();
        let dictionary = Dictionary::from_sources(&report.sources);
        debug!(tokens = dictionary.len(), "built dictionary");
        Ok((dictionary, sources, report.skipped))
    }

    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let (dictionary, sources, skipped) = self.load()?;
        let mut report = BuildReport {
            sources,
            skipped,
            artifacts: Vec::new(),
        };

        for (platform_name, platform) in &self.config.platforms {
            info!(platform = %platform_name, "building platform");
            for file in &platform.files {
                let path = self.root.join(platform.destination_path(file));
                let artifact = self
                    .render_file(&dictionary, platform_name, file, &path)
                    .map_err(|source| BuildError::Format {
                        platform: platform_name.clone(),
                        destination: file.destination.clone(),
                        source,
                    })?;
                report.artifacts.push(artifact);
            }
        }

        Ok(report)
    }

    fn render_file(
        &self,
        dictionary: &Dictionary,
        platform: &str,
        file: &FileConfig,
        path: &Path,
    ) -> Result<BuiltArtifact, FormatError> {
        let mut options = FormatOptions::default().with_header(self.config.output.header.clone());
        if let Some(mode) = file.references {
            options = options.with_references(mode);
        }
        let input = FormatInput::filtered(dictionary, |token| file.filter.matches(token))
            .with_options(options);

        let result = publish(
            &self.registry,
            PublishRequest::new(input, &file.format).with_output_path(path),
        )?;
        let path = match result.artifact {
            PublishArtifact::File(path) => path,
            PublishArtifact::InMemory(_) => path.to_path_buf(),
        };
        Ok(BuiltArtifact {
            platform: platform.to_string(),
            format: file.format.clone(),
            path,
            token_count: result.token_count,
        })
    }
}

/// Build every platform of `config` under `root`.
pub fn build(config: &DtcssConfig, root: impl AsRef<Path>) -> Result<BuildReport, BuildError> {
    Build::new(config, root).run()
}
