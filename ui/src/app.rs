use std::time::Duration;

use usergrid_business::{ColumnDef, Limit};

use crate::{state::State, widgets::UserTable};

/// How often to repaint while the users request is in flight.
const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Columns shown by the app, in display order.
pub fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "ID"),
        ColumnDef::new("firstname", "First name"),
        ColumnDef::new("lastname", "Last name"),
        ColumnDef::new("country", "Country"),
    ]
}

pub struct UserGridApp {
    pub state: State,
    pub table: UserTable,
}

impl UserGridApp {
    /// Called once before the first frame. Starts the users fetch.
    pub fn new(mut state: State) -> Self {
        state.start_fetch();
        Self {
            state,
            table: UserTable::new(default_columns(), Limit::default()),
        }
    }
}

impl eframe::App for UserGridApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_fetch();
        if self.state.users.is_pending() {
            ctx.request_repaint_after(FETCH_POLL_INTERVAL);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("User Grid");

            ui.horizontal(|ui| {
                if let Some(users) = self.state.users.users() {
                    ui.label(format!("{} rows fetched", users.len()));
                }
                if self.state.users.is_pending() {
                    ui.spinner();
                }
            });
            ui.separator();

            self.table.show(ui, self.state.dataset());
        });
    }
}
