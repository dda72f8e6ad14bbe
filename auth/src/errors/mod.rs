pub mod api_error;
pub mod code;

pub use api_error::ApiError;
pub use api_error::ErrorDetails;
pub use api_error::Violation;
pub use code::ErrorCategory;
pub use code::ErrorCode;
