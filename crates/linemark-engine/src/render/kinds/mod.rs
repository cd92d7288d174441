mod block_quote;
mod heading;
mod list_item;
mod rule;
mod table;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_item::ListItem;
pub use rule::Rule;
pub use table::Table;
