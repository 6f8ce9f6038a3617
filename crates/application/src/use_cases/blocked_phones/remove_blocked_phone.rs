use phone_blocklist_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockedPhoneRepository;

pub struct RemoveBlockedPhoneUseCase {
    repo: Arc<dyn BlockedPhoneRepository>,
}

impl RemoveBlockedPhoneUseCase {
    pub fn new(repo: Arc<dyn BlockedPhoneRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.deactivate(id).await? {
            return Err(DomainError::BlockNotFound(id));
        }

        info!(record_id = id, "Phone number unblocked");
        Ok(())
    }
}
