pub mod charts;
pub mod summary;
pub mod table;
pub mod types;
pub mod utils;

use std::time::Duration;

use crate::error::RenderError;
use crate::models::AnalysisResult;

pub use charts::{ChartSlot, CHART_CATALOG};
pub use summary::SummaryStats;
pub use types::*;

/// Turns a successful analysis into the dashboard view and holds the view
/// that is currently shown.
#[derive(Debug)]
pub struct DashboardRenderer {
    chart_render_delay: Duration,
    current: Option<DashboardView>,
}

impl DashboardRenderer {
    pub fn new(chart_render_delay: Duration) -> Self {
        Self {
            chart_render_delay,
            current: None,
        }
    }

    /// Pure mapping from a result to its view.
    pub fn build_view(
        result: &AnalysisResult,
        chart_render_delay: Duration,
    ) -> Result<DashboardView, RenderError> {
        let info = result.basic_info.ok_or(RenderError::MissingBasicInfo)?;
        let stats = SummaryStats::compute(info, result)?;

        Ok(DashboardView {
            file_banner: FileBanner {
                name: format!("📁 {}", result.filename.as_deref().unwrap_or_default()),
                stats: format!("📊 {} rows, {} columns", info.rows, info.columns),
            },
            tiles: stats.tiles(),
            charts: charts::chart_panels(&result.charts, chart_render_delay),
            table: table::table_preview(&result.sample_data),
        })
    }

    /// Replaces whatever was shown before. On error the previous view is kept.
    pub fn render(&mut self, result: &AnalysisResult) -> Result<&DashboardView, RenderError> {
        let view = Self::build_view(result, self.chart_render_delay)?;
        tracing::debug!(
            "Rendered dashboard: {} tiles, {} charts",
            view.tiles.len(),
            view.charts.len()
        );
        Ok(self.current.insert(view))
    }

    pub fn teardown(&mut self) {
        self.current = None;
    }

    pub fn view(&self) -> Option<&DashboardView> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analysis(value: serde_json::Value) -> AnalysisResult {
        serde_json::from_value(value).unwrap()
    }

    fn products() -> AnalysisResult {
        analysis(json!({
            "success": true,
            "filename": "products.xlsx",
            "basic_info": {"rows": 2, "columns": 2},
            "missing_values": {"Product": 0, "Sales": 0},
            "numeric_stats": {"Sales": {"mean": 150.0}},
            "charts": {
                "heatmap": {"data": [], "layout": {}},
                "pie_chart": {"data": [], "layout": {}}
            },
            "sample_data": [
                {"Product": "Laptop", "Sales": 100},
                {"Product": "Mouse", "Sales": 200}
            ]
        }))
    }

    #[test]
    fn renders_all_three_regions() {
        let mut renderer = DashboardRenderer::new(Duration::from_millis(100));
        let view = renderer.render(&products()).unwrap();

        assert_eq!(view.file_banner.name, "📁 products.xlsx");
        assert_eq!(view.file_banner.stats, "📊 2 rows, 2 columns");
        assert_eq!(view.tiles.len(), 6);
        assert_eq!(view.tiles[2].value, "1");
        assert_eq!(view.tiles[3].value, "1");
        let keys: Vec<&str> = view.charts.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["pie_chart", "heatmap"]);
        assert!(matches!(view.table, TablePreview::Rows { ref rows, .. } if rows.len() == 2));
    }

    #[test]
    fn second_render_replaces_first() {
        let mut renderer = DashboardRenderer::new(Duration::ZERO);
        renderer.render(&products()).unwrap();

        let second = analysis(json!({
            "success": true,
            "filename": "empty.csv",
            "basic_info": {"rows": 0, "columns": 0}
        }));
        let view = renderer.render(&second).unwrap();

        assert!(view.charts.is_empty());
        assert_eq!(view.table, TablePreview::Empty);
        assert_eq!(view.tiles[0].value, "0");
        assert_eq!(view.tiles[5].value, "100%");
    }

    #[test]
    fn failed_render_keeps_previous_view() {
        let mut renderer = DashboardRenderer::new(Duration::ZERO);
        renderer.render(&products()).unwrap();

        let broken = analysis(json!({"success": true, "filename": "x.csv"}));
        assert_eq!(
            renderer.render(&broken).unwrap_err(),
            RenderError::MissingBasicInfo
        );
        assert_eq!(
            renderer.view().map(|v| v.file_banner.name.as_str()),
            Some("📁 products.xlsx")
        );
    }

    #[test]
    fn teardown_clears_view() {
        let mut renderer = DashboardRenderer::new(Duration::ZERO);
        renderer.render(&products()).unwrap();
        renderer.teardown();
        assert!(renderer.view().is_none());
    }
}
