// src/parse/mod.rs

pub mod credits;
pub mod page;
pub mod table;

pub use credits::decode_credits;
pub use page::{Node, Page};
pub use table::{Cell, ColumnIndex, ColumnLabels, TableExtractor};
