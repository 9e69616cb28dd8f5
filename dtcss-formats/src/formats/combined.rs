//! `css/variables-combined`: semantic tokens only, always written as `var()` references.
//!
//! Semantic tokens alias base tokens, so the combined sheet is meant to be loaded after the base
//! sheet; writing the references as `var(--…)` keeps the two linked at runtime and lets a dark
//! base palette flow through without repeating every semantic token.

use crate::css::{declarations, StylesheetWriter};
use crate::error::FormatError;
use crate::format::{Format, FormatInput};
use dtcss_parser::{partition, ReferenceMode, Tier};

pub struct CombinedVariablesFormat;

impl Format for CombinedVariablesFormat {
    fn name(&self) -> &str {
        "css/variables-combined"
    }

    fn description(&self) -> &str {
        "Semantic tokens as var() references, light on :root and dark in a prefers-color-scheme block"
    }

    fn render(&self, input: &FormatInput<'_>) -> Result<String, FormatError> {
        match input.options.references {
            None | Some(ReferenceMode::Wrapped) => {}
            Some(other) => {
                return Err(FormatError::InvalidOption {
                    format: self.name().to_string(),
                    option: format!("references = \"{other}\""),
                })
            }
        }

        let split = partition(input.tokens.iter().copied(), Some(Tier::Semantic));
        let mode = ReferenceMode::Wrapped;

        let mut writer = StylesheetWriter::new(&input.options.header);
        writer.root_block(&declarations(&split.light, input.dictionary, mode));
        writer.dark_block(&declarations(&split.dark, input.dictionary, mode));
        Ok(writer.finish())
    }
}
