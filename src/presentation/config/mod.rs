mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ClientSettings, DatabaseSettings, ENV_PREFIX, GatewaySettings, LoggingSettings,
    PromptSettings, RetrievalSettings, ServerSettings, Settings,
};
