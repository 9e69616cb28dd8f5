//! CSS custom property rendering
//!
//! Shared by every format in this crate. Produces stylesheets of the form
//!
//! ```text
//! /**
//!  * Do not edit directly, this file was auto-generated.
//!  */
//!
//! :root {
//!   --color-bg: #fff; /* Page background */
//! }
//!
//! @media (prefers-color-scheme: dark) {
//!   :root {
//!     --color-bg: #000;
//!   }
//! }
//! ```
//!
//! Blocks without declarations are left out; a stylesheet with no tokens is the header alone.

use dtcss_parser::{Dictionary, ReferenceMode, TokenMap};

pub const DEFAULT_HEADER: &str =
    "/**\n * Do not edit directly, this file was auto-generated.\n */\n\n";

pub const DARK_MEDIA_QUERY: &str = "@media (prefers-color-scheme: dark)";

/// Builds a stylesheet block by block.
pub struct StylesheetWriter {
    output: String,
    blocks: usize,
    indent_level: usize,
}

impl StylesheetWriter {
    pub fn new(header: &str) -> Self {
        Self {
            output: header.to_string(),
            blocks: 0,
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_line(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn start_block(&mut self) {
        if self.blocks > 0 {
            self.output.push('\n');
        }
        self.blocks += 1;
    }

    fn push_declarations(&mut self, declarations: &[String]) {
        self.indent_level += 1;
        for declaration in declarations {
            self.push_line(declaration);
        }
        self.indent_level -= 1;
    }

    /// Emit `:root { ... }` at the top level.
    pub fn root_block(&mut self, declarations: &[String]) {
        if declarations.is_empty() {
            return;
        }
        self.start_block();
        self.push_line(":root {");
        self.push_declarations(declarations);
        self.push_line("}");
    }

    /// Emit `:root { ... }` inside the dark color scheme media query.
    pub fn dark_block(&mut self, declarations: &[String]) {
        if declarations.is_empty() {
            return;
        }
        self.start_block();
        self.push_line(&format!("{DARK_MEDIA_QUERY} {{"));
        self.indent_level += 1;
        self.push_line(":root {");
        self.push_declarations(declarations);
        self.push_line("}");
        self.indent_level -= 1;
        self.push_line("}");
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// A single custom property declaration, without indentation.
pub fn declaration(name: &str, value: &str, comment: Option<&str>) -> String {
    match comment {
        Some(comment) if !comment.is_empty() => {
            format!("--{name}: {value}; /* {} */", comment.replace("*/", "*\\/"))
        }
        _ => format!("--{name}: {value};"),
    }
}

/// Declarations for every token of a map, in map order.
pub fn declarations(
    tokens: &TokenMap,
    dictionary: &Dictionary,
    mode: ReferenceMode,
) -> Vec<String> {
    tokens
        .values()
        .map(|token| {
            let value = dictionary.resolve(token, mode);
            declaration(&token.name, &value, token.comment.as_deref())
        })
        .collect()
}
