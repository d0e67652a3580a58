use std::sync::Arc;

use egui_kittest::Harness;
use usergrid_business::{Limit, Record};
use usergrid_ui::UserGridApp;
use usergrid_ui::app::default_columns;
use usergrid_ui::state::State;
use usergrid_ui::widgets::UserTable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to run after an interaction so actions get applied and re-rendered.
#[allow(unused)]
pub const UI_PROPAGATION_FRAMES: usize = 3;

/// A table plus the dataset handed to it every frame.
pub struct TableHost {
    pub table: UserTable,
    pub data: Arc<Vec<Record>>,
}

impl TableHost {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            table: UserTable::new(default_columns(), Limit::default()),
            data: Arc::new(records),
        }
    }
}

/// Harness rendering only the table, with no network involved.
#[allow(unused)]
pub fn table_harness<'a>(records: Vec<Record>) -> Harness<'a, TableHost> {
    // Tall enough that a full page of rows is inside the viewport.
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 1400.0))
        .build_ui_state(
            |ui, host: &mut TableHost| {
                host.table.show(ui, &host.data);
            },
            TableHost::new(records),
        )
}

#[allow(unused)]
pub fn step_frames<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, UserGridApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserGridApp> {
        &mut self.harness
    }

    /// App against a mock server answering `GET /api/users` exactly once.
    #[allow(unused)]
    pub async fn new_app(body: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(body)).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = UserGridApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Waits for the request to land and lets the app pick up the response.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}
