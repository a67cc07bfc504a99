//! CLI presentation: text and json formatters per command family.

mod tokens;

pub use tokens::{format_token_table, JsonSink, TextTableSink};
