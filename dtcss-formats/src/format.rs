//! Format trait definition
//!
//! This module defines the core Format trait that all stylesheet formats implement. A format
//! receives the tokens selected for one output file, together with the whole dictionary so that
//! references can be resolved against tokens the file itself does not emit.

use crate::css::DEFAULT_HEADER;
use crate::error::FormatError;
use dtcss_parser::{Dictionary, FlattenedToken, ReferenceMode};

/// Per-file knobs handed to a format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prepended verbatim to every artifact.
    pub header: String,
    /// Reference rewrite requested by the file; `None` lets the format decide.
    pub references: Option<ReferenceMode>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            header: DEFAULT_HEADER.to_string(),
            references: None,
        }
    }
}

impl FormatOptions {
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_references(mut self, mode: ReferenceMode) -> Self {
        self.references = Some(mode);
        self
    }
}

/// Everything a format needs to render one file.
#[derive(Debug, Clone)]
pub struct FormatInput<'a> {
    pub dictionary: &'a Dictionary,
    /// Tokens selected for this file, in dictionary order.
    pub tokens: Vec<&'a FlattenedToken>,
    pub options: FormatOptions,
}

impl<'a> FormatInput<'a> {
    /// Select every token of the dictionary.
    pub fn all(dictionary: &'a Dictionary) -> Self {
        FormatInput {
            dictionary,
            tokens: dictionary.all_tokens().iter().collect(),
            options: FormatOptions::default(),
        }
    }

    /// Select the tokens matching `predicate`.
    pub fn filtered<F>(dictionary: &'a Dictionary, predicate: F) -> Self
    where
        F: Fn(&FlattenedToken) -> bool,
    {
        FormatInput {
            dictionary,
            tokens: dictionary
                .all_tokens()
                .iter()
                .filter(|token| predicate(token))
                .collect(),
            options: FormatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }
}

/// Trait for stylesheet formats
///
/// Implementors turn a selection of flattened tokens into the text of one output file.
///
/// # Examples
///
/// ```ignore
/// struct ListFormat;
///
/// impl Format for ListFormat {
///     fn name(&self) -> &str {
///         "text/list"
///     }
///
///     fn render(&self, input: &FormatInput<'_>) -> Result<String, FormatError> {
///         Ok(input.tokens.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "css/variables")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Reference rewrite used when the file does not request one
    fn default_references(&self) -> ReferenceMode {
        ReferenceMode::Wrapped
    }

    /// Render the selected tokens
    fn render(&self, input: &FormatInput<'_>) -> Result<String, FormatError>;
}
