mod add_blocked_phone;
mod check_phone;
mod get_blocked_phones;
mod get_phone_history;
mod remove_blocked_phone;

pub use add_blocked_phone::AddBlockedPhoneUseCase;
pub use check_phone::CheckPhoneUseCase;
pub use get_blocked_phones::GetBlockedPhonesUseCase;
pub use get_phone_history::GetPhoneHistoryUseCase;
pub use remove_blocked_phone::RemoveBlockedPhoneUseCase;

use phone_blocklist_domain::DomainError;

fn require_phone_number(phone_number: &str) -> Result<(), DomainError> {
    if phone_number.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "Phone number is required".to_string(),
        ));
    }
    Ok(())
}
