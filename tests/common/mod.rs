#![allow(dead_code)]

use serde_json::{json, Value};

pub const API_PATH: &str = "/api/dashboard";

pub fn sample_result() -> Value {
    json!({
        "success": true,
        "filename": "Sample Data",
        "basic_info": {"rows": 8, "columns": 6, "column_names": ["Product", "Category", "Sales", "Price", "Region", "Rating"]},
        "data_types": {"Product": "object", "Sales": "int64"},
        "missing_values": {"Product": 0, "Category": 0, "Sales": 0, "Price": 0, "Region": 0, "Rating": 0},
        "numeric_stats": {
            "Sales": {"count": 8.0, "mean": 137.5},
            "Price": {"count": 8.0, "mean": 196.875},
            "Rating": {"count": 8.0, "mean": 4.3}
        },
        "charts": {
            "heatmap": {"data": [{"type": "heatmap"}], "layout": {"title": "Correlation Matrix"}},
            "bar_chart": {"data": [{"type": "bar"}], "layout": {"title": "Count of Category"}},
            "pie_chart": {"data": [{"type": "pie", "hole": 0.3}], "layout": {"title": "Distribution of Product"}}
        },
        "sample_data": [
            {"Product": "Laptop", "Category": "Electronics", "Sales": 100, "Price": 500, "Region": "North", "Rating": 4.5},
            {"Product": "Monitor", "Category": "Electronics", "Sales": 300, "Price": 1400, "Region": "West", "Rating": 4.8}
        ]
    })
}

pub fn second_result() -> Value {
    json!({
        "success": true,
        "filename": "tiny.csv",
        "basic_info": {"rows": 1, "columns": 1},
        "missing_values": {"only": 1},
        "numeric_stats": {},
        "charts": {"box_plot": {"data": [], "layout": {}}},
        "sample_data": [{"only": null}]
    })
}
