//! Token list presentation: borderless text table and JSON sinks.

use crate::error::ApiError;
use crate::robot::{TokenRow, TokenSink};
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

const COLUMN_GAP: u16 = 3;

/// Format rows as a borderless table with the given header.
pub fn format_token_table(header: &[&str; 3], rows: &[TokenRow]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(header.to_vec());
    for row in rows {
        table.add_row(row.cells().to_vec());
    }
    let last = header.len() - 1;
    for (index, column) in table.column_iter_mut().enumerate() {
        let right = if index == last { 0 } else { COLUMN_GAP };
        column.set_padding((0, right));
    }
    table.to_string()
}

/// Text table written to a writer, usually standard output.
pub struct TextTableSink<W: Write> {
    out: W,
}

impl<W: Write> TextTableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TokenSink for TextTableSink<W> {
    fn render(&mut self, header: &[&str; 3], rows: &[TokenRow]) -> Result<(), ApiError> {
        writeln!(self.out, "{}", format_token_table(header, rows))?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), ApiError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

/// JSON array of `{ name, id, created }` objects. An empty listing is `[]`.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TokenSink for JsonSink<W> {
    fn render(&mut self, _header: &[&str; 3], rows: &[TokenRow]) -> Result<(), ApiError> {
        let json = serde_json::to_string_pretty(rows)
            .map_err(|e| ApiError::Presentation(e.to_string()))?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), ApiError> {
        tracing::info!("{}", message);
        writeln!(self.out, "[]")?;
        Ok(())
    }
}
