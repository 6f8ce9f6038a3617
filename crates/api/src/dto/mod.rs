pub mod blocked_phone;

pub use blocked_phone::{
    BlockPhoneRequest, BlockedPhoneResponse, MessageResponse, PhoneCheckRequest,
    PhoneCheckResponse,
};
