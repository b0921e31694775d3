pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, MedAssistError};
pub use events::{ChatEvent, EventBus};
pub use id::{new_correlation_id, SessionId};

pub type Result<T> = std::result::Result<T, MedAssistError>;
