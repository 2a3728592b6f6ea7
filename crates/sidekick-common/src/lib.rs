pub mod errors;
pub mod id;
pub mod notices;

pub use errors::{ConfigError, SidekickError};
pub use id::SessionId;
pub use notices::{Notice, NoticeLevel};
