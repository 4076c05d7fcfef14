use std::collections::HashMap;
use std::time::Duration;

use super::types::{ChartOptions, ChartPanel};
use crate::models::ChartSpec;

const ANIMATION_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlot {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Every chart the dashboard knows how to place, in display order.
pub const CHART_CATALOG: [ChartSlot; 7] = [
    ChartSlot {
        key: "pie_chart",
        title: "Distribution Analysis",
        icon: "fas fa-chart-pie",
    },
    ChartSlot {
        key: "bar_chart",
        title: "Count Analysis",
        icon: "fas fa-chart-bar",
    },
    ChartSlot {
        key: "histogram",
        title: "Distribution Pattern",
        icon: "fas fa-chart-area",
    },
    ChartSlot {
        key: "line_chart",
        title: "Trend Analysis",
        icon: "fas fa-chart-line",
    },
    ChartSlot {
        key: "scatter_plot",
        title: "Relationship Analysis",
        icon: "fas fa-braille",
    },
    ChartSlot {
        key: "heatmap",
        title: "Correlation Matrix",
        icon: "fas fa-th",
    },
    ChartSlot {
        key: "box_plot",
        title: "Statistical Distribution",
        icon: "fas fa-square",
    },
];

/// Panels for the slots present in `charts`, in catalog order. Keys outside
/// the catalog are ignored.
pub fn chart_panels(
    charts: &HashMap<String, ChartSpec>,
    render_delay: Duration,
) -> Vec<ChartPanel> {
    CHART_CATALOG
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            let spec = charts.get(slot.key)?;
            Some(ChartPanel {
                key: slot.key,
                title: slot.title,
                icon: slot.icon,
                element_id: format!("chart-{}", slot.key),
                data: spec.data.clone(),
                layout: spec.layout.clone(),
                options: ChartOptions::default(),
                render_delay,
                animation_delay: ANIMATION_STEP * index as u32,
            })
        })
        .collect()
}
