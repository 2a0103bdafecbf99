pub mod block_quote;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_item::{ListItem, ListKind};
pub use paragraph::Paragraph;
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
