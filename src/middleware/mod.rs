pub mod auth;
pub mod response;

pub use auth::{authorize, required_access, Access, AuthUser};
pub use response::{ApiResponse, ApiResult, JsonBody};
