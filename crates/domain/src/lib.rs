//! Phone Blocklist Domain Layer
pub mod block_record;
pub mod config;
pub mod errors;
pub mod phone_number;

pub use block_record::{BlockRecord, NewBlock, PhoneStatus};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
