use phone_blocklist_domain::{BlockRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::BlockedPhoneRepository;

pub struct GetBlockedPhonesUseCase {
    repo: Arc<dyn BlockedPhoneRepository>,
}

impl GetBlockedPhonesUseCase {
    pub fn new(repo: Arc<dyn BlockedPhoneRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<BlockRecord>, DomainError> {
        self.repo.list_active().await
    }
}
