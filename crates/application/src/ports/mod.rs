mod blocked_phone_repository;

pub use blocked_phone_repository::BlockedPhoneRepository;
