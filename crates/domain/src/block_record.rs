use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::DomainError;
use crate::phone_number;

pub const DEFAULT_REASON: &str = "No reason provided";
pub const DEFAULT_BLOCKED_BY: &str = "System";

/// One block event for a phone number. Records are never removed; unblocking
/// clears `is_active` and leaves the row as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub id: i64,
    pub phone_number: Arc<str>,
    pub reason: Arc<str>,
    pub blocked_by: Arc<str>,
    pub blocked_date: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A block request that already passed validation, normalization and
/// defaulting. Stores accept nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlock {
    pub phone_number: Arc<str>,
    pub reason: Arc<str>,
    pub blocked_by: Arc<str>,
}

impl NewBlock {
    pub fn new(
        phone_number: &str,
        reason: Option<&str>,
        blocked_by: Option<&str>,
    ) -> Result<Self, DomainError> {
        if phone_number.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Phone number is required".to_string(),
            ));
        }
        if !phone_number::validate(phone_number) {
            return Err(DomainError::InvalidPhoneNumber(phone_number.to_string()));
        }

        Ok(Self {
            phone_number: Arc::from(phone_number::normalize(phone_number)),
            reason: Arc::from(or_default(reason, DEFAULT_REASON)),
            blocked_by: Arc::from(or_default(blocked_by, DEFAULT_BLOCKED_BY)),
        })
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

/// Result of a status check for a single number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneStatus {
    pub phone_number: String,
    pub active: Option<BlockRecord>,
}

impl PhoneStatus {
    pub fn is_blocked(&self) -> bool {
        self.active.is_some()
    }
}
