use super::Repositories;
use phone_blocklist_api::BlocklistUseCases;
use phone_blocklist_application::use_cases::{
    AddBlockedPhoneUseCase, CheckPhoneUseCase, GetBlockedPhonesUseCase, GetPhoneHistoryUseCase,
    RemoveBlockedPhoneUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub blocklist: BlocklistUseCases,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let repo = repos.blocked_phone.clone();

        Self {
            blocklist: BlocklistUseCases {
                get_blocked_phones: Arc::new(GetBlockedPhonesUseCase::new(repo.clone())),
                add_blocked_phone: Arc::new(AddBlockedPhoneUseCase::new(repo.clone())),
                remove_blocked_phone: Arc::new(RemoveBlockedPhoneUseCase::new(repo.clone())),
                check_phone: Arc::new(CheckPhoneUseCase::new(repo.clone())),
                get_phone_history: Arc::new(GetPhoneHistoryUseCase::new(repo)),
            },
        }
    }
}
