pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod state;
pub mod storage;
pub mod submit;
pub mod table;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_context;
pub use submit::SubmitClient;
pub use table::Table;
