//! Stylesheet formats for flattened design tokens
//!
//!     This crate turns the tokens selected for an output file into CSS text, and optionally
//!     writes that text to disk.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (name, description, render)
//!     - FormatRegistry: centralized discovery and selection of formats by name
//!     - css.rs: the shared writer for `:root` and `prefers-color-scheme: dark` blocks
//!     - publish.rs: render through the registry, then keep in memory or write to a path
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait, FormatInput, FormatOptions
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── css.rs                  # StylesheetWriter and declaration rendering
//!     ├── formats
//!     │   ├── variables.rs        # css/variables
//!     │   ├── combined.rs         # css/variables-combined
//!     │   ├── dark.rs             # css/variables-dark
//!     │   └── mod.rs
//!     ├── publish.rs
//!     ├── lib.rs
//!
//! Formats decide which partition goes where and how references are rewritten. Flattening and
//! reference resolution belong to dtcss-parser; nothing here inspects raw token trees.
//!
//! Every format emits the configured header first, then `:root` for light tokens and a
//! `@media (prefers-color-scheme: dark)` block for dark tokens, skipping blocks with no tokens.

pub mod css;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::{Format, FormatInput, FormatOptions};
pub use publish::{publish, PublishArtifact, PublishResult, PublishRequest};
pub use registry::FormatRegistry;
