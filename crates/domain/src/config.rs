pub mod errors;
pub mod events;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use events::EventsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{Config, ConfigOverrides};
