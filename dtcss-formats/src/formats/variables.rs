//! `css/variables`: light tokens at `:root`, dark tokens in the dark color scheme media query.

use crate::css::{declarations, StylesheetWriter};
use crate::error::FormatError;
use crate::format::{Format, FormatInput};
use dtcss_parser::partition;

pub struct VariablesFormat;

impl Format for VariablesFormat {
    fn name(&self) -> &str {
        "css/variables"
    }

    fn description(&self) -> &str {
        "Custom properties on :root, dark-scheme tokens in a prefers-color-scheme block"
    }

    fn render(&self, input: &FormatInput<'_>) -> Result<String, FormatError> {
        let mode = input
            .options
            .references
            .unwrap_or_else(|| self.default_references());
        let split = partition(input.tokens.iter().copied(), None);

        let mut writer = StylesheetWriter::new(&input.options.header);
        writer.root_block(&declarations(&split.light, input.dictionary, mode));
        writer.dark_block(&declarations(&split.dark, input.dictionary, mode));
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::DEFAULT_HEADER;
    use crate::format::FormatOptions;
    use dtcss_parser::{Dictionary, ReferenceMode, TokenSource};
    use serde_json::json;

    fn dictionary() -> Dictionary {
        let sources = vec![
            TokenSource {
                path: "tokens/base/light.json".into(),
                tree: json!({"color": {"bg": {"$value": "#fff"}}}),
            },
            TokenSource {
                path: "tokens/base/dark.json".into(),
                tree: json!({"color": {"bg": {"$value": "#000"}}}),
            },
            TokenSource {
                path: "tokens/semantic/light.json".into(),
                tree: json!({"surface": {"$value": "{color.bg}", "$description": "Cards"}}),
            },
        ];
        Dictionary::from_sources(&sources)
    }

    #[test]
    fn light_then_dark() {
        let dict = dictionary();
        let css = VariablesFormat
            .render(&FormatInput::filtered(&dict, |t| t.name == "color-bg"))
            .unwrap();
        assert_eq!(
            css,
            format!(
                "{DEFAULT_HEADER}:root {{\n  --color-bg: #fff;\n}}\n\n\
                 @media (prefers-color-scheme: dark) {{\n  :root {{\n    --color-bg: #000;\n  }}\n}}\n"
            )
        );
    }

    #[test]
    fn references_default_to_var() {
        let dict = dictionary();
        let css = VariablesFormat.render(&FormatInput::all(&dict)).unwrap();
        assert!(css.contains("  --surface: var(--color-bg); /* Cards */\n"));
    }

    #[test]
    fn value_mode_inlines_references() {
        let dict = dictionary();
        let input = FormatInput::all(&dict)
            .with_options(FormatOptions::default().with_references(ReferenceMode::Value));
        let css = VariablesFormat.render(&input).unwrap();
        assert!(css.contains("  --surface: #fff; /* Cards */\n"));
    }

    #[test]
    fn no_tokens_renders_header_only() {
        let dict = Dictionary::new();
        let input = FormatInput::all(&dict)
            .with_options(FormatOptions::default().with_header("/* generated */\n"));
        assert_eq!(VariablesFormat.render(&input).unwrap(), "/* generated */\n");
    }
}
