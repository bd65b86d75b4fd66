//! Page controller flows: initial load, filtering over fetched rows, and the
//! save then re-fetch cycle.

use inkle_business::{BusinessConfig, EditPhase, LoadStatus, SortColumn, TaxesPage};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn taxes() -> serde_json::Value {
    json!([
        { "id": "1", "name": "Acme", "gender": "male", "requestDate": "2024-03-05", "country": "US" },
        { "id": "2", "name": "Globex", "gender": "female", "requestDate": "2024-01-10", "country": "India" },
        { "id": "3", "name": "Initech", "gender": "male", "requestDate": "05-06-24", "country": "US" }
    ])
}

async fn setup() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "US" },
            { "id": "2", "name": "India" },
            { "id": "3", "name": "Canada" }
        ])))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_mount_fetches_once_and_loads_rows() {
    let mock_server = setup().await;
    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(taxes()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = TaxesPage::new(BusinessConfig::new(mock_server.uri()));
    page.mount();
    page.mount();
    assert!(page.is_loading());

    assert!(page.process_next().await);
    assert_eq!(page.load_status(), &LoadStatus::Loaded);

    let model = page.row_model();
    assert_eq!(model.total_count, 3);
    assert_eq!(model.ids(), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_failed_load_shows_empty_table() {
    let mock_server = setup().await;
    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut page = TaxesPage::new(BusinessConfig::new(mock_server.uri()));
    page.mount();
    page.process_next().await;

    assert!(page.row_model().is_empty());
    assert_eq!(
        page.load_error(),
        Some("Server error: 500 - Internal Server Error")
    );
}

#[tokio::test]
async fn test_filter_sort_over_fetched_rows() {
    let mock_server = setup().await;
    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(taxes()))
        .mount(&mock_server)
        .await;

    let mut page = TaxesPage::new(BusinessConfig::new(mock_server.uri()));
    page.load_records();
    page.process_next().await;

    page.table.toggle_country("US");
    page.table.toggle_sort(SortColumn::RequestDate);
    assert_eq!(page.row_model().ids(), vec!["1", "3"]);

    page.table.toggle_sort(SortColumn::RequestDate);
    assert_eq!(page.row_model().ids(), vec!["3", "1"]);

    page.table.set_search("init");
    let model = page.row_model();
    assert_eq!(model.ids(), vec!["3"]);
    assert_eq!(model.filtered_count, 1);
    assert_eq!(model.total_count, 3);
}

#[tokio::test]
async fn test_save_refetches_collection() {
    let mock_server = setup().await;

    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(taxes()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/taxes/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2",
            "name": "Jane Doe",
            "gender": "female",
            "requestDate": "2024-01-10",
            "country": "Canada"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = TaxesPage::new(BusinessConfig::new(mock_server.uri()));
    page.load_records();
    page.process_next().await;

    page.open_edit("2");
    assert_eq!(page.edit.phase(), &EditPhase::Editing);
    assert_eq!(page.edit.name(), "Globex");
    page.process_next().await;
    assert_eq!(page.edit.countries().as_slice().len(), 3);

    // The second list fetch sees the updated row.
    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "2", "name": "Jane Doe", "gender": "female", "requestDate": "2024-01-10", "country": "Canada" }
        ])))
        .mount(&mock_server)
        .await;

    page.edit.set_name("Jane Doe");
    page.edit.select_country("Canada");
    page.save_edit().unwrap();
    assert!(page.edit.is_saving());

    page.process_next().await;
    assert!(!page.edit.is_open());
    assert!(page.is_loading());

    page.process_next().await;
    let model = page.row_model();
    assert_eq!(model.ids(), vec!["2"]);
    assert_eq!(model.rows[0].display_name(), "Jane Doe");
    assert_eq!(model.rows[0].display_country(), "Canada");
}

#[tokio::test]
async fn test_save_failure_keeps_modal_for_retry() {
    let mock_server = setup().await;

    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(taxes()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/taxes/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut page = TaxesPage::new(BusinessConfig::new(mock_server.uri()));
    page.load_records();
    page.process_next().await;

    page.open_edit("1");
    page.process_next().await;
    page.save_edit().unwrap();
    page.process_next().await;

    assert!(page.edit.is_open());
    let message = page.edit.error().unwrap();
    assert!(message.starts_with("Failed to save. Please try again."));
    assert!(!page.is_loading());
}
