use phone_blocklist_domain::{phone_number, BlockRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::BlockedPhoneRepository;

use super::require_phone_number;

pub struct GetPhoneHistoryUseCase {
    repo: Arc<dyn BlockedPhoneRepository>,
}

impl GetPhoneHistoryUseCase {
    pub fn new(repo: Arc<dyn BlockedPhoneRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<Vec<BlockRecord>, DomainError> {
        require_phone_number(raw)?;
        self.repo.list_history(&phone_number::normalize(raw)).await
    }
}
