pub mod config;
pub mod cors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod terminal;

pub use config::{Environment, Settings};
pub use router::{DRUG_ADVISOR_PATH, create_router};
pub use state::AppState;
