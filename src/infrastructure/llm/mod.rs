mod mock_model_gateway;
mod openai_gateway;

pub use mock_model_gateway::MockModelGateway;
pub use openai_gateway::{ADVICE_TOOL_NAME, OpenAiGateway, advice_tool};
