use smallvec::SmallVec;

use super::types::{StatTile, TILE_COUNT};
use crate::error::RenderError;
use crate::models::{AnalysisResult, BasicInfo};

/// Numbers behind the six summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub rows: u64,
    pub columns: u64,
    pub numeric_columns: u64,
    pub text_columns: u64,
    pub total_missing: u64,
    pub quality_percent: i64,
}

impl SummaryStats {
    pub fn compute(info: BasicInfo, result: &AnalysisResult) -> Result<Self, RenderError> {
        let numeric_columns = result.numeric_stats.len() as u64;
        let text_columns = info
            .columns
            .checked_sub(numeric_columns)
            .ok_or(RenderError::Integrity {
                columns: info.columns,
                numeric: numeric_columns,
            })?;
        let total_missing = result
            .missing_values
            .values()
            .fold(0u64, |total, count| total.saturating_add(*count));

        Ok(Self {
            rows: info.rows,
            columns: info.columns,
            numeric_columns,
            text_columns,
            total_missing,
            quality_percent: quality_percent(info.rows, info.columns, total_missing),
        })
    }

    pub fn tiles(&self) -> SmallVec<[StatTile; TILE_COUNT]> {
        let mut tiles = SmallVec::new();
        tiles.push(StatTile {
            label: "Total Rows",
            value: self.rows.to_string(),
            icon: "fas fa-list",
        });
        tiles.push(StatTile {
            label: "Total Columns",
            value: self.columns.to_string(),
            icon: "fas fa-columns",
        });
        tiles.push(StatTile {
            label: "Numeric Columns",
            value: self.numeric_columns.to_string(),
            icon: "fas fa-calculator",
        });
        tiles.push(StatTile {
            label: "Text Columns",
            value: self.text_columns.to_string(),
            icon: "fas fa-font",
        });
        tiles.push(StatTile {
            label: "Missing Values",
            value: self.total_missing.to_string(),
            icon: "fas fa-exclamation-triangle",
        });
        tiles.push(StatTile {
            label: "Data Quality",
            value: format!("{}%", self.quality_percent),
            icon: "fas fa-check-circle",
        });
        tiles
    }
}

/// Share of non-missing cells, rounded half up. An empty grid counts as 100%.
fn quality_percent(rows: u64, columns: u64, total_missing: u64) -> i64 {
    let cells = rows as f64 * columns as f64;
    if cells == 0.0 {
        return 100;
    }
    let percent = (1.0 - total_missing as f64 / cells) * 100.0;
    (percent + 0.5).floor() as i64
}
