use phone_blocklist_application::use_cases::{
    AddBlockedPhoneUseCase, CheckPhoneUseCase, GetBlockedPhonesUseCase, GetPhoneHistoryUseCase,
    RemoveBlockedPhoneUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct BlocklistUseCases {
    pub get_blocked_phones: Arc<GetBlockedPhonesUseCase>,
    pub add_blocked_phone: Arc<AddBlockedPhoneUseCase>,
    pub remove_blocked_phone: Arc<RemoveBlockedPhoneUseCase>,
    pub check_phone: Arc<CheckPhoneUseCase>,
    pub get_phone_history: Arc<GetPhoneHistoryUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub blocklist: BlocklistUseCases,
}
