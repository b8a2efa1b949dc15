mod app_error;

pub use app_error::AppError;

/// Result alias used by handlers, queries and startup code alike.
pub type Result<T> = std::result::Result<T, AppError>;
