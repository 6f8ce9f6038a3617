use chrono::{NaiveDateTime, SecondsFormat};
use phone_blocklist_domain::{BlockRecord, PhoneStatus};
use serde::{Deserialize, Serialize};

const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored UTC timestamps go out as RFC 3339 on full records. Values that do
/// not parse are passed through as stored.
fn to_rfc3339(stored: String) -> String {
    match NaiveDateTime::parse_from_str(&stored, STORED_TIMESTAMP_FORMAT) {
        Ok(ts) => ts.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => stored,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedPhoneResponse {
    pub id: i64,
    pub phone_number: String,
    pub reason: String,
    pub blocked_date: String,
    pub blocked_by: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl BlockedPhoneResponse {
    pub fn from_record(r: BlockRecord) -> Self {
        Self {
            id: r.id,
            phone_number: r.phone_number.to_string(),
            reason: r.reason.to_string(),
            blocked_date: to_rfc3339(r.blocked_date),
            blocked_by: r.blocked_by.to_string(),
            is_active: r.is_active,
            created_at: to_rfc3339(r.created_at),
            updated_at: to_rfc3339(r.updated_at),
        }
    }
}

/// Body of `POST /blocked-phones`. Missing fields deserialize as empty so the
/// use case can report them with a proper message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockPhoneRequest {
    #[serde(default)]
    pub phone_number: String,
    pub reason: Option<String>,
    pub blocked_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneCheckRequest {
    #[serde(default)]
    pub phone_number: String,
}

/// `blocked_date` keeps the stored `YYYY-MM-DD HH:MM:SS` form here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneCheckResponse {
    pub is_blocked: bool,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_date: Option<String>,
}

impl PhoneCheckResponse {
    pub fn from_status(status: PhoneStatus) -> Self {
        let active = status.active;
        Self {
            is_blocked: active.is_some(),
            phone_number: status.phone_number,
            reason: active.as_ref().map(|r| r.reason.to_string()),
            blocked_by: active.as_ref().map(|r| r.blocked_by.to_string()),
            blocked_date: active.map(|r| r.blocked_date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
