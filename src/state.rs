use crate::models::{Summary, User};
use crate::notify::Notices;
use crate::submit::SubmitClient;
use crate::table::Table;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub user: Arc<User>,
    pub summary: Summary,
    pub table: Arc<Mutex<Table>>,
    pub submit: SubmitClient,
    pub notices: Notices,
}

impl AppState {
    pub fn new(user: User, summary: Summary, table: Table, submit: SubmitClient) -> Self {
        Self {
            user: Arc::new(user),
            summary,
            table: Arc::new(Mutex::new(table)),
            submit,
            notices: Notices::new(),
        }
    }
}
