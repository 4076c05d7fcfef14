use serde_json::{Map, Value};

use super::types::{Cell, TablePreview};
use super::utils::{format_number, plain_text};

/// Headers come from the first row only. Keys that later rows add are
/// dropped and keys they lack render as empty cells.
pub fn table_preview(sample_data: &[Map<String, Value>]) -> TablePreview {
    let Some(first) = sample_data.first() else {
        return TablePreview::Empty;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let rows = sample_data
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| match row.get(header) {
                    None => Cell::Empty,
                    Some(value) => format_cell(value),
                })
                .collect()
        })
        .collect();

    TablePreview::Rows { headers, rows }
}

pub fn format_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Number(number) => Cell::Number(format_number(number)),
        other => Cell::Text(plain_text(other)),
    }
}
