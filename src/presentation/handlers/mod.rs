mod api_error;
mod drug_advisor;
mod health;

pub use api_error::{ApiError, ErrorResponse};
pub use drug_advisor::{AdviceRequest, drug_advisor_handler};
pub use health::health_handler;
