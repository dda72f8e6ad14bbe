pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use errors::JwtError;
pub use service::TokenService;
pub use service::TOKEN_LIFETIME_HOURS;
