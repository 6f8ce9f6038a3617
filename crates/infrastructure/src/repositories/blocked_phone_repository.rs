use async_trait::async_trait;
use phone_blocklist_application::ports::BlockedPhoneRepository;
use phone_blocklist_domain::{BlockRecord, DomainError, NewBlock};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type BlockRecordRow = (i64, String, String, String, String, i64, String, String);

pub struct SqliteBlockedPhoneRepository {
    pool: SqlitePool,
}

impl SqliteBlockedPhoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: BlockRecordRow) -> BlockRecord {
        let (id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at) =
            row;
        BlockRecord {
            id,
            phone_number: Arc::from(phone_number.as_str()),
            reason: Arc::from(reason.as_str()),
            blocked_by: Arc::from(blocked_by.as_str()),
            blocked_date,
            is_active: is_active != 0,
            created_at,
            updated_at,
        }
    }

    fn now() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn is_unique_violation(e: &sqlx::Error) -> bool {
        e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    }
}

#[async_trait]
impl BlockedPhoneRepository for SqliteBlockedPhoneRepository {
    #[instrument(skip(self))]
    async fn insert(&self, block: &NewBlock) -> Result<BlockRecord, DomainError> {
        let now = Self::now();

        let row = sqlx::query_as::<_, BlockRecordRow>(
            "INSERT INTO blocked_phone_numbers
             (phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, 1, ?, ?)
             RETURNING id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at",
        )
        .bind(block.phone_number.as_ref())
        .bind(block.reason.as_ref())
        .bind(block.blocked_by.as_ref())
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if Self::is_unique_violation(&e) {
                DomainError::AlreadyBlocked(block.phone_number.to_string())
            } else {
                error!(error = %e, "Failed to insert blocked phone");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn insert_if_not_active(
        &self,
        block: &NewBlock,
    ) -> Result<Option<BlockRecord>, DomainError> {
        let now = Self::now();

        // Check and insert happen in one statement; the partial unique index
        // catches anything that still slips past the NOT EXISTS guard.
        let result = sqlx::query_as::<_, BlockRecordRow>(
            "INSERT INTO blocked_phone_numbers
             (phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at)
             SELECT ?, ?, ?, ?, 1, ?, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM blocked_phone_numbers WHERE phone_number = ? AND is_active = 1
             )
             RETURNING id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at",
        )
        .bind(block.phone_number.as_ref())
        .bind(block.reason.as_ref())
        .bind(block.blocked_by.as_ref())
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .bind(block.phone_number.as_ref())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.map(Self::row_to_record)),
            Err(e) if Self::is_unique_violation(&e) => {
                warn!(
                    phone_number = %block.phone_number,
                    "Concurrent block rejected by active-record index"
                );
                Ok(None)
            }
            Err(e) => {
                error!(error = %e, "Failed to insert blocked phone");
                Err(DomainError::DatabaseError(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_latest_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError> {
        let row = sqlx::query_as::<_, BlockRecordRow>(
            "SELECT id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at
             FROM blocked_phone_numbers
             WHERE phone_number = ?
             ORDER BY blocked_date DESC, id DESC
             LIMIT 1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query latest blocked phone record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn find_active_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError> {
        let row = sqlx::query_as::<_, BlockRecordRow>(
            "SELECT id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at
             FROM blocked_phone_numbers
             WHERE phone_number = ? AND is_active = 1
             ORDER BY blocked_date DESC, id DESC
             LIMIT 1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to check phone");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE blocked_phone_numbers SET is_active = 0, updated_at = ?
             WHERE id = ? AND is_active = 1",
        )
        .bind(Self::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to remove blocked phone");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> Result<Vec<BlockRecord>, DomainError> {
        let rows = sqlx::query_as::<_, BlockRecordRow>(
            "SELECT id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at
             FROM blocked_phone_numbers
             WHERE is_active = 1
             ORDER BY blocked_date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query blocked phones");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn list_history(&self, phone_number: &str) -> Result<Vec<BlockRecord>, DomainError> {
        let rows = sqlx::query_as::<_, BlockRecordRow>(
            "SELECT id, phone_number, reason, blocked_by, blocked_date, is_active, created_at, updated_at
             FROM blocked_phone_numbers
             WHERE phone_number = ?
             ORDER BY blocked_date DESC, id DESC",
        )
        .bind(phone_number)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query phone history");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }
}
