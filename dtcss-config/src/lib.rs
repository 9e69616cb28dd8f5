//! Shared configuration loader for dtcss.
//!
//! `defaults/dtcss.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer project-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DtcssConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use dtcss_parser::{FlattenedToken, ReferenceMode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/dtcss.default.toml");

/// Name of the optional project configuration file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "dtcss.toml";

/// Top-level configuration consumed by the build.
#[derive(Debug, Clone, Deserialize)]
pub struct DtcssConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    /// Platforms by name; built in name order.
    pub platforms: BTreeMap<String, PlatformConfig>,
}

/// Where token files come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Glob patterns relative to the project root.
    pub include: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Prepended to every generated file.
    pub header: String,
}

/// A group of output files sharing a build directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Directory relative to the project root.
    pub build_path: String,
    #[serde(default)]
    pub files: Vec<FileConfig>,
}

impl PlatformConfig {
    /// Where `file` is written, relative to the project root.
    pub fn destination_path(&self, file: &FileConfig) -> PathBuf {
        Path::new(&self.build_path).join(&file.destination)
    }
}

/// One generated file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub destination: String,
    pub format: String,
    #[serde(default)]
    pub filter: TokenFilter,
    /// Overrides the format's default reference rewrite.
    #[serde(default)]
    pub references: Option<ReferenceMode>,
}

/// Selects the tokens an output file receives.
///
/// All conditions must hold. Empty lists impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenFilter {
    /// Every substring must occur in the token's source path.
    #[serde(default)]
    pub path_contains: Vec<String>,
    /// No substring may occur in the token's source path.
    #[serde(default)]
    pub path_excludes: Vec<String>,
    /// The token's `$type` must be one of these.
    #[serde(default)]
    pub types: Vec<String>,
}

impl TokenFilter {
    pub fn matches(&self, token: &FlattenedToken) -> bool {
        let source = token.source.to_string_lossy();
        self.path_contains.iter().all(|s| source.contains(s.as_str()))
            && !self.path_excludes.iter().any(|s| source.contains(s.as_str()))
            && (self.types.is_empty()
                || token
                    .token_type
                    .as_ref()
                    .is_some_and(|t| self.types.contains(t)))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `dtcss.toml` from a project root, if present.
    pub fn with_project_root(self, root: impl AsRef<Path>) -> Self {
        self.with_optional_file(root.as_ref().join(PROJECT_CONFIG_FILE))
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DtcssConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DtcssConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtcss_parser::TokenValue;
    use std::fs;
    use tempfile::tempdir;

    fn token(source: &str, token_type: Option<&str>) -> FlattenedToken {
        FlattenedToken {
            name: "x".into(),
            value: TokenValue::Literal("1".into()),
            comment: None,
            path: vec!["x".into()],
            token_type: token_type.map(str::to_string),
            source: source.into(),
        }
    }

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.source.include,
            vec!["tokens/**/*.json", "tokens/**/*.tokens"]
        );
        assert!(config.output.header.starts_with("/**\n * Do not edit directly"));
        assert_eq!(
            config.platforms.keys().collect::<Vec<_>>(),
            vec!["css_base", "css_dimension", "css_semantic", "css_text"]
        );

        let base = &config.platforms["css_base"];
        assert_eq!(
            base.destination_path(&base.files[0]),
            PathBuf::from("build/css/base/colors.css")
        );
        assert_eq!(base.files[0].references, Some(ReferenceMode::Wrapped));

        let semantic = &config.platforms["css_semantic"].files[0];
        assert_eq!(semantic.format, "css/variables-combined");
        assert_eq!(semantic.references, None);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.header", "/* generated */\n")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.header, "/* generated */\n");
    }

    #[test]
    fn project_file_layers_over_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            r#"
[source]
include = ["design/**/*.json"]

[platforms.css_base]
build_path = "dist/"

[[platforms.css_base.files]]
destination = "base.css"
format = "css/variables"
references = "value"
"#,
        )
        .unwrap();

        let config = Loader::new()
            .with_project_root(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.source.include, vec!["design/**/*.json"]);
        let base = &config.platforms["css_base"];
        assert_eq!(base.build_path, "dist/");
        assert_eq!(base.files.len(), 1);
        assert_eq!(base.files[0].references, Some(ReferenceMode::Value));
        assert_eq!(base.files[0].filter, TokenFilter::default());
        assert!(config.platforms.contains_key("css_semantic"));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Loader::new()
            .with_file(dir.path().join("nope.toml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn filter_conditions_all_apply() {
        let filter = TokenFilter {
            path_contains: vec!["base".into()],
            path_excludes: vec!["dimension".into()],
            types: vec![],
        };
        assert!(filter.matches(&token("tokens/base/light.json", None)));
        assert!(!filter.matches(&token("tokens/base/dimension.json", None)));
        assert!(!filter.matches(&token("tokens/semantic/light.json", None)));

        let typed = TokenFilter {
            types: vec!["color".into()],
            ..TokenFilter::default()
        };
        assert!(typed.matches(&token("a.json", Some("color"))));
        assert!(!typed.matches(&token("a.json", Some("dimension"))));
        assert!(!typed.matches(&token("a.json", None)));
        assert!(TokenFilter::default().matches(&token("a.json", None)));
    }
}
