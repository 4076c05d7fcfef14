use serde_json::Value;
use smallvec::SmallVec;
use std::time::Duration;

pub const TILE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBanner {
    pub name: String,
    pub stats: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

/// Options passed to the drawing library alongside every chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: &'static [&'static str],
    pub displaylogo: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: true,
            mode_bar_buttons_to_remove: &["pan2d", "lasso2d", "select2d"],
            displaylogo: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub element_id: String,
    pub data: Value,
    pub layout: Value,
    pub options: ChartOptions,
    /// Wait before drawing so the container has been laid out.
    pub render_delay: Duration,
    pub animation_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    /// The row has no value under this header.
    Empty,
    Number(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePreview {
    Empty,
    Rows {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
}

impl TablePreview {
    pub const PLACEHOLDER: &'static str = "No data to display";
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub file_banner: FileBanner,
    pub tiles: SmallVec<[StatTile; TILE_COUNT]>,
    pub charts: Vec<ChartPanel>,
    pub table: TablePreview,
}
