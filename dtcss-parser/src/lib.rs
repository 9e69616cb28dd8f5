//! # dtcss-parser
//!
//! Turns nested design token files into flat, ordered CSS variable maps.
//!
//! Pipeline
//!
//!     file ──load──▶ TokenSource ──flatten──▶ TokenMap ──▶ Dictionary ──partition──▶ light / dark
//!
//!     - loader.rs      Reading and parsing token files, best-effort across many files
//!     - flatten.rs     Tree walk producing one FlattenedToken per token record
//!     - value.rs       Literal / reference / dimension values and reference rewriting
//!     - dictionary.rs  All tokens of a build; resolves references to values
//!     - partition.rs   Path-based light/dark and base/semantic classification
//!
//! Nothing here fails on bad token data. Malformed records are skipped during flattening,
//! unreadable files are reported by the loader and left out, unknown references render as
//! `var(--name)`. Rendering to CSS lives in `dtcss-formats`.

pub mod dictionary;
pub mod flatten;
pub mod loader;
pub mod partition;
pub mod value;

pub use dictionary::{Dictionary, ResolvedToken};
pub use flatten::{flatten, flatten_from, FlattenedToken, TokenMap};
pub use loader::{LoadError, LoadReport, SkippedSource, SourceLoader, TokenSource};
pub use partition::{classify, partition, Classification, Partition, Scheme, Tier};
pub use value::{resolve_reference, ReferenceMode, TokenValue};
