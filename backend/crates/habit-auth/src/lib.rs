pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
