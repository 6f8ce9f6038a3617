use phone_blocklist_infrastructure::repositories::SqliteBlockedPhoneRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub blocked_phone: Arc<SqliteBlockedPhoneRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            blocked_phone: Arc::new(SqliteBlockedPhoneRepository::new(pool)),
        }
    }
}
