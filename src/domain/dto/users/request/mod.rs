pub mod auth_request;
pub mod register_request;
pub mod update_profile_request;

pub use auth_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use update_profile_request::UpdateProfileRequest;
