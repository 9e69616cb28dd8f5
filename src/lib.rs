//! # dtcss
//!
//! Builds CSS custom property stylesheets from design token files.
//!
//!     tokens/**/*.json ──discover──▶ SourceLoader ──▶ Dictionary ──▶ platforms/files ──▶ build/**/*.css
//!
//! The heavy lifting lives in the member crates:
//!
//!     - dtcss-parser   flattening, reference resolution, light/dark partitioning
//!     - dtcss-formats  the css/* formats and writing artifacts
//!     - dtcss-config   defaults and layered project configuration
//!
//! This crate wires them together: [`discover`] expands the configured globs and [`build()`]
//! renders every configured file.

pub mod build;
pub mod discover;

pub use build::{build, Build, BuildError, BuildReport, BuiltArtifact};
pub use discover::{discover, DiscoverError};

pub use dtcss_config as config;
pub use dtcss_formats as formats;
pub use dtcss_parser as parser;
