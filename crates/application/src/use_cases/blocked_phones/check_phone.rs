use phone_blocklist_domain::{phone_number, DomainError, PhoneStatus};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::BlockedPhoneRepository;

use super::require_phone_number;

pub struct CheckPhoneUseCase {
    repo: Arc<dyn BlockedPhoneRepository>,
}

impl CheckPhoneUseCase {
    pub fn new(repo: Arc<dyn BlockedPhoneRepository>) -> Self {
        Self { repo }
    }

    /// Reports whether a number is currently blocked. Strings that are not
    /// valid numbers are looked up as given and report not blocked.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<PhoneStatus, DomainError> {
        require_phone_number(raw)?;

        let normalized = phone_number::normalize(raw);
        let active = self.repo.find_active_by_number(&normalized).await?;

        debug!(
            phone_number = %normalized,
            blocked = active.is_some(),
            "Phone status checked"
        );

        Ok(PhoneStatus {
            phone_number: normalized,
            active,
        })
    }
}
