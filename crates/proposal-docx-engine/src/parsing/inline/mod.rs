//! # Inline Tokenizing
//!
//! Cursor-based splitting of one line into plain and styled segments.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from block classification and runs over the
//! text of paragraphs, list items and table cells. It returns spans only;
//! turning segments into document runs is the converter's job, so the
//! precedence rules can be tested without building a document.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSegment` (Text, Styled) and `Marker`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` main entry point
//!
//! ## Precedence
//!
//! The leftmost opening delimiter wins. At one position the longest emphasis
//! run is tried first: `***x***` is a single bold-italic segment.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{InlineSegment, Marker, segment_text};
