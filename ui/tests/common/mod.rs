use std::time::Duration;

use egui_kittest::Harness;
use inkle_ui::InkleApp;
use inkle_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, InkleApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, InkleApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, InkleApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Serves the default records and countries.
    pub async fn new_app() -> Self {
        Self::new_app_with_taxes(ResponseTemplate::new(200).set_body_json(sample_taxes())).await
    }

    /// Fails the list request with `status_code`.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_taxes(ResponseTemplate::new(status_code)).await
    }

    pub async fn new_app_with_taxes(taxes: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/taxes"))
            .respond_with(taxes)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/countries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "name": "US" },
                { "id": "2", "name": "India" },
                { "id": "3", "name": "Canada" }
            ])))
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = InkleApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1280.0, 1024.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Runs frames until pending requests have been applied.
    pub async fn settle(&mut self) {
        self.harness.step();
        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.harness.run_steps(3);
        }
    }
}

pub fn sample_taxes() -> Value {
    json!([
        { "id": "1", "name": "Acme", "gender": "male", "requestDate": "2024-03-05", "country": "US" },
        { "id": "2", "name": "Globex", "gender": "female", "requestDate": "05-01-24", "country": "India" },
        { "id": "3", "entity": "Initech", "gender": "Male", "requestDate": "2023-12-25", "country": "US" }
    ])
}
