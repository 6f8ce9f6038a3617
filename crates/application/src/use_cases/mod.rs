pub mod blocked_phones;

pub use blocked_phones::{
    AddBlockedPhoneUseCase, CheckPhoneUseCase, GetBlockedPhonesUseCase, GetPhoneHistoryUseCase,
    RemoveBlockedPhoneUseCase,
};
