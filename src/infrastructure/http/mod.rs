mod http_advisor_client;

pub use http_advisor_client::HttpAdvisorClient;
