//! HTML for the single dashboard page. Every string that came from a user
//! file or the analysis service is escaped before it reaches markup.

use std::fmt::Write;

use serde_json::{json, Value};

use crate::services::dashboard::utils::escape_html;
use crate::services::dashboard::{Cell, ChartPanel, DashboardView, StatTile, TablePreview};
use crate::services::feedback::Toast;
use crate::services::{AnalysisService, UploadController};

/// Everything the page shows, borrowed from the controller.
pub struct Page<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub toasts: Vec<&'a Toast>,
    pub dashboard: Option<&'a DashboardView>,
}

impl<'a> Page<'a> {
    pub fn from_controller<S: AnalysisService>(controller: &'a UploadController<S>) -> Self {
        let feedback = controller.feedback();
        Self {
            loading: feedback.is_loading(),
            error: feedback.error(),
            toasts: feedback.toasts(),
            dashboard: controller.dashboard(),
        }
    }
}

pub fn render_page(page: &Page<'_>) -> String {
    let mut html = String::from(HEAD);

    let loading_class = if page.loading { "loading show" } else { "loading" };
    let _ = write!(
        html,
        r#"<div id="loading" class="{loading_class}"><div class="spinner"></div><p>Analyzing your data...</p></div>"#
    );

    html.push_str(r#"<div id="errorDisplay">"#);
    if let Some(message) = page.error {
        let _ = write!(
            html,
            r#"<div class="error fade-in"><i class="fas fa-exclamation-circle"></i> {}</div>"#,
            escape_html(message)
        );
    }
    html.push_str("</div>");

    for toast in &page.toasts {
        let _ = write!(
            html,
            r#"<div class="toast {}"><i class="{}"></i> {}</div>"#,
            toast.kind.css_class(),
            toast.kind.icon(),
            escape_html(&toast.message)
        );
    }

    render_upload_section(&mut html, page);
    match page.dashboard {
        Some(view) => render_dashboard(&mut html, view),
        None => html.push_str(r#"<div id="dashboard" class="dashboard"></div>"#),
    }

    html.push_str(FOOT);
    html
}

fn render_upload_section(html: &mut String, page: &Page<'_>) {
    let display = if page.dashboard.is_some() { "none" } else { "block" };
    let _ = write!(
        html,
        r#"<section id="uploadSection" style="display: {display};">
<form id="uploadForm" method="post" action="/upload" enctype="multipart/form-data">
<label id="uploadArea" class="upload-area" for="fileInput">
<i class="fas fa-cloud-upload-alt"></i>
<p>Drag &amp; drop your Excel or CSV file here, or click to browse</p>
</label>
<input id="fileInput" type="file" name="file" accept=".xlsx,.xls,.csv" hidden onchange="this.form.submit()">
</form>
<form method="post" action="/sample"><button type="submit">Try Sample Data</button></form>
</section>"#
    );
}

fn render_dashboard(html: &mut String, view: &DashboardView) {
    let _ = write!(
        html,
        r#"<div id="dashboard" class="dashboard show fade-in">
<div class="file-info"><span id="fileName">{}</span> <span id="fileStats">{}</span>
<form method="post" action="/reset"><button type="submit">Upload New File</button></form></div>"#,
        escape_html(&view.file_banner.name),
        escape_html(&view.file_banner.stats)
    );

    html.push_str(r#"<div id="statsGrid" class="stats-grid">"#);
    for tile in &view.tiles {
        render_tile(html, tile);
    }
    html.push_str("</div>");

    html.push_str(r#"<div id="chartsGrid" class="charts-grid">"#);
    for panel in &view.charts {
        let _ = write!(
            html,
            r#"<div class="chart-container slide-up" style="animation-delay: {}s;"><div class="chart-title"><i class="{}"></i> {}</div><div id="{}" style="height: 400px;"></div></div>"#,
            panel.animation_delay.as_secs_f64(),
            panel.icon,
            escape_html(panel.title),
            escape_html(&panel.element_id)
        );
    }
    html.push_str("</div>");

    html.push_str(r#"<div id="dataTableContainer">"#);
    render_table(html, &view.table);
    html.push_str("</div>");

    if !view.charts.is_empty() {
        html.push_str("<script>\n");
        for panel in &view.charts {
            html.push_str(&chart_script(panel));
        }
        html.push_str("</script>");
    }
    html.push_str("</div>");
}

fn render_tile(html: &mut String, tile: &StatTile) {
    let _ = write!(
        html,
        r#"<div class="stat-item slide-up"><i class="{}"></i><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
        tile.icon,
        escape_html(&tile.value),
        escape_html(tile.label)
    );
}

pub fn render_table(html: &mut String, table: &TablePreview) {
    let (headers, rows) = match table {
        TablePreview::Empty => {
            let _ = write!(html, "<p>{}</p>", TablePreview::PLACEHOLDER);
            return;
        }
        TablePreview::Rows { headers, rows } => (headers, rows),
    };

    html.push_str("<table><thead><tr>");
    for header in headers {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            match cell {
                Cell::Null => html.push_str(r#"<span class="null-value">null</span>"#),
                Cell::Empty => {}
                Cell::Number(text) | Cell::Text(text) => html.push_str(&escape_html(text)),
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

/// Deferred draw call for one panel. Panels share one delay, so the timers
/// fire in the order they are registered.
pub fn chart_script(panel: &ChartPanel) -> String {
    let options = json!({
        "responsive": panel.options.responsive,
        "displayModeBar": panel.options.display_mode_bar,
        "modeBarButtonsToRemove": panel.options.mode_bar_buttons_to_remove,
        "displaylogo": panel.options.displaylogo,
    });
    format!(
        "setTimeout(function () {{ Plotly.newPlot({}, {}, {}, {}); }}, {});\n",
        script_json(&Value::String(panel.element_id.clone())),
        script_json(&panel.data),
        script_json(&panel.layout),
        script_json(&options),
        panel.render_delay.as_millis()
    )
}

// `<` only occurs inside JSON strings, where `\u003c` means the same and
// cannot close the surrounding script element.
fn script_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Excel Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
<style>
.loading { display: none; } .loading.show { display: block; }
.dashboard { display: none; } .dashboard.show { display: block; }
.null-value { color: #a0aec0; font-style: italic; }
.upload-area.dragover { border-color: #667eea; }
.toast { position: fixed; top: 20px; right: 20px; background: white; padding: 15px 20px; border-radius: 10px; }
.toast-success { border-left: 4px solid #48bb78; }
.toast-error { border-left: 4px solid #e53e3e; }
.toast-info { border-left: 4px solid #667eea; }
</style>
</head>
<body>
"#;

const FOOT: &str = r#"
<script>
(function () {
  var area = document.getElementById("uploadArea");
  var input = document.getElementById("fileInput");
  if (!area || !input) { return; }
  area.addEventListener("dragover", function (e) { e.preventDefault(); area.classList.add("dragover"); });
  area.addEventListener("dragleave", function (e) { e.preventDefault(); area.classList.remove("dragover"); });
  area.addEventListener("drop", function (e) {
    e.preventDefault();
    area.classList.remove("dragover");
    if (e.dataTransfer.files.length > 0) { input.files = e.dataTransfer.files; input.form.submit(); }
  });
})();
</script>
</body>
</html>
"#;
