use async_trait::async_trait;
use phone_blocklist_domain::{BlockRecord, DomainError, NewBlock};

/// Persistence for block records. Phone numbers passed in are expected to be
/// normalized already; lookups compare them verbatim.
#[async_trait]
pub trait BlockedPhoneRepository: Send + Sync {
    /// Inserts unconditionally. Fails with `AlreadyBlocked` if the storage
    /// layer refuses a second active record for the number.
    async fn insert(&self, block: &NewBlock) -> Result<BlockRecord, DomainError>;

    /// Inserts a new active record in one atomic step unless the number is
    /// already actively blocked, in which case nothing is written and `None`
    /// is returned.
    async fn insert_if_not_active(
        &self,
        block: &NewBlock,
    ) -> Result<Option<BlockRecord>, DomainError>;

    /// Most recent record by blocked date, active or not.
    async fn find_latest_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError>;

    async fn find_active_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError>;

    /// Returns true iff the record existed, was active, and is now inactive.
    async fn deactivate(&self, id: i64) -> Result<bool, DomainError>;

    /// Active records, newest first.
    async fn list_active(&self) -> Result<Vec<BlockRecord>, DomainError>;

    /// Every record for the number, newest first.
    async fn list_history(&self, phone_number: &str) -> Result<Vec<BlockRecord>, DomainError>;
}
