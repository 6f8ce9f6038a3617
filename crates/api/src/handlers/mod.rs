pub mod blocked_phones;
pub mod health;

pub use health::health_check;
