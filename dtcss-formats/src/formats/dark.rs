//! `css/variables-dark`: only the dark color scheme media query, references written bare.

use crate::css::{declarations, StylesheetWriter};
use crate::error::FormatError;
use crate::format::{Format, FormatInput};
use dtcss_parser::{partition, ReferenceMode};

pub struct DarkVariablesFormat;

impl Format for DarkVariablesFormat {
    fn name(&self) -> &str {
        "css/variables-dark"
    }

    fn description(&self) -> &str {
        "Dark-scheme tokens only, inside a prefers-color-scheme block"
    }

    fn default_references(&self) -> ReferenceMode {
        ReferenceMode::Bare
    }

    fn render(&self, input: &FormatInput<'_>) -> Result<String, FormatError> {
        let mode = input
            .options
            .references
            .unwrap_or_else(|| self.default_references());
        let split = partition(input.tokens.iter().copied(), None);

        let mut writer = StylesheetWriter::new(&input.options.header);
        writer.dark_block(&declarations(&split.dark, input.dictionary, mode));
        Ok(writer.finish())
    }
}
