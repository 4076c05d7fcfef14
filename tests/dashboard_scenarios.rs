mod common;

use std::time::Duration;

use serde_json::json;
use sheet_dashboard::error::UploadError;
use sheet_dashboard::models::UploadCandidate;
use sheet_dashboard::services::dashboard::{Cell, TablePreview};
use sheet_dashboard::services::{
    DashboardRenderer, HttpAnalysisClient, Surface, UiState, UploadController,
};

use common::{sample_result, second_result, API_PATH};

fn controller_for(server: &mockito::Server) -> UploadController<HttpAnalysisClient> {
    let client = HttpAnalysisClient::new(&format!("{}{}", server.url(), API_PATH), None).unwrap();
    UploadController::new(client, DashboardRenderer::new(Duration::from_millis(100)))
}

#[tokio::test]
async fn uppercase_csv_extension_is_accepted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/dashboard/upload")
        .with_body(sample_result().to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    controller
        .submit_upload(UploadCandidate::new("report.CSV", vec![b'x'; 10]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(controller.ui_state(), UiState::Dashboard);
}

#[tokio::test]
async fn pdf_is_rejected_without_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/dashboard/upload")
        .expect(0)
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    let err = controller
        .submit_upload(UploadCandidate::new("data.pdf", vec![b'x'; 10]))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err, UploadError::InvalidFormat);
    assert!(!controller.feedback().is_loading());
    assert_eq!(controller.surface(), Surface::Upload);
}

#[tokio::test]
async fn twenty_mebibyte_workbook_is_too_large() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/dashboard/upload")
        .expect(0)
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    let err = controller
        .submit_upload(UploadCandidate::new("big.xlsx", vec![0u8; 20 * 1024 * 1024]))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err, UploadError::TooLarge);
    assert_eq!(
        controller.feedback().error(),
        Some("File size too large. Please upload files smaller than 16MB.")
    );
}

#[tokio::test]
async fn server_error_message_is_shown_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/dashboard/upload")
        .with_status(400)
        .with_body(json!({"success": false, "error": "bad sheet"}).to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    controller
        .submit_upload(UploadCandidate::new("data.xlsx", vec![1u8; 64]))
        .await
        .unwrap_err();

    assert_eq!(controller.feedback().error(), Some("bad sheet"));
    assert_eq!(controller.surface(), Surface::Upload);
    assert!(controller.dashboard().is_none());
}

#[tokio::test]
async fn only_present_charts_render_in_catalog_order() {
    let mut server = mockito::Server::new_async().await;
    let mut body = sample_result();
    body["charts"] = json!({
        "heatmap": {"data": [], "layout": {}},
        "pie_chart": {"data": [], "layout": {}}
    });
    server
        .mock("GET", "/api/dashboard/sample-data")
        .with_body(body.to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    controller.load_sample().await.unwrap();

    let keys: Vec<&str> = controller
        .dashboard()
        .unwrap()
        .charts
        .iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, ["pie_chart", "heatmap"]);
}

#[tokio::test]
async fn reset_after_dashboard_restores_upload_surface() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/dashboard/sample-data")
        .with_body(sample_result().to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);
    controller.load_sample().await.unwrap();
    assert!(controller.dashboard().is_some());

    controller.reset();

    assert_eq!(controller.ui_state(), UiState::Idle);
    assert_eq!(controller.surface(), Surface::Upload);
    assert!(controller.dashboard().is_none());
    assert!(controller.feedback().error().is_none());
}

#[tokio::test]
async fn second_dataset_leaves_nothing_from_the_first() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/dashboard/sample-data")
        .with_body(sample_result().to_string())
        .create_async()
        .await;
    server
        .mock("POST", "/api/dashboard/upload")
        .with_body(second_result().to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);

    controller.load_sample().await.unwrap();
    controller
        .submit_upload(UploadCandidate::new("tiny.csv", &b"only\n\n"[..]))
        .await
        .unwrap();

    let view = controller.dashboard().unwrap();
    assert_eq!(view.file_banner.name, "📁 tiny.csv");
    assert_eq!(view.tiles.len(), 6);
    assert_eq!(view.tiles[4].value, "1");
    assert_eq!(view.tiles[5].value, "0%");
    let keys: Vec<&str> = view.charts.iter().map(|c| c.key).collect();
    assert_eq!(keys, ["box_plot"]);
    assert_eq!(
        view.table,
        TablePreview::Rows {
            headers: vec!["only".to_string()],
            rows: vec![vec![Cell::Null]],
        }
    );
}

#[tokio::test]
async fn summary_counts_match_numeric_stats() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/dashboard/sample-data")
        .with_body(sample_result().to_string())
        .create_async()
        .await;
    let mut controller = controller_for(&server);
    controller.load_sample().await.unwrap();

    let tiles = &controller.dashboard().unwrap().tiles;
    assert_eq!(tiles[0].value, "8");
    assert_eq!(tiles[1].value, "6");
    assert_eq!(tiles[2].value, "3");
    assert_eq!(tiles[3].value, "3");
    assert_eq!(tiles[4].value, "0");
    assert_eq!(tiles[5].value, "100%");
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let client = HttpAnalysisClient::new("http://127.0.0.1:1/api/dashboard", None).unwrap();
    let mut controller = UploadController::new(client, DashboardRenderer::new(Duration::ZERO));

    let err = controller.load_sample().await.unwrap_err();

    assert!(matches!(err, UploadError::Transport(_)));
    assert!(controller
        .feedback()
        .error()
        .unwrap()
        .starts_with("Network error: "));
    assert!(!controller.feedback().is_loading());
}
