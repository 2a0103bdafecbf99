//! # Block Handling
//!
//! Two-phase block handling for a restricted markdown subset.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (table row, heading, rule, quote, list item, blank, paragraph) using
//!    local facts only.
//!
//! 2. **Table Accumulation** (`accumulator`): a `TableAccumulator` buffers
//!    consecutive table rows and parses them when the run ends.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`accumulator`**: `TableAccumulator` state machine and `ParsedTable`
//!
//! ## Key Invariants
//!
//! - Classification precedence is fixed: a line with a pipe is a table row
//!   before it is anything else (headings excepted)
//! - Every line maps to exactly one class; nothing is an error

pub mod accumulator;
pub mod classify;
pub mod kinds;

pub use accumulator::{ParsedTable, TableAccumulator};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::ListKind;
