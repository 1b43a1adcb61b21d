use std::sync::Arc;

use crate::application::services::AdvisorService;

#[derive(Clone)]
pub struct AppState {
    pub advisor_service: Arc<AdvisorService>,
}

impl AppState {
    pub fn new(advisor_service: Arc<AdvisorService>) -> Self {
        Self { advisor_service }
    }
}
