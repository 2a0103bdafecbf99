//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `*`/`_` runs of one, two or three characters
//!   (italic, bold, bold-italic)
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Strikethrough`**: `TILDES = b"~~"`
//!
//! The tokenizer asks these types for delimiters; it never hardcodes `**`
//! or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisChar};
pub use strikethrough::Strikethrough;
