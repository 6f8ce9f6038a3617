use phone_blocklist_domain::{BlockRecord, DomainError, NewBlock};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockedPhoneRepository;

pub struct AddBlockedPhoneUseCase {
    repo: Arc<dyn BlockedPhoneRepository>,
}

impl AddBlockedPhoneUseCase {
    pub fn new(repo: Arc<dyn BlockedPhoneRepository>) -> Self {
        Self { repo }
    }

    /// Blocks a number, or re-blocks one whose previous records are all
    /// inactive. Earlier records are left untouched as history.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        phone_number: &str,
        reason: Option<&str>,
        blocked_by: Option<&str>,
    ) -> Result<BlockRecord, DomainError> {
        let block = NewBlock::new(phone_number, reason, blocked_by)?;

        let record = self
            .repo
            .insert_if_not_active(&block)
            .await?
            .ok_or_else(|| DomainError::AlreadyBlocked(block.phone_number.to_string()))?;

        info!(
            record_id = record.id,
            phone_number = %record.phone_number,
            blocked_by = %record.blocked_by,
            "Phone number blocked"
        );

        Ok(record)
    }
}
