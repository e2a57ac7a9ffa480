#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod signup_request;
pub mod user_dto;
