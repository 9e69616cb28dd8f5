//! Format implementations
//!
//! Each format selects which partition of its input goes where in the stylesheet and how
//! references are rewritten; the CSS text itself comes from [`crate::css`].

pub mod combined;
pub mod dark;
pub mod variables;

pub use combined::CombinedVariablesFormat;
pub use dark::DarkVariablesFormat;
pub use variables::VariablesFormat;
