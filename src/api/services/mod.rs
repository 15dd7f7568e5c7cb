pub mod error_code;
pub mod health;
pub mod helpers;
pub mod shorten;
pub mod types;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use shorten::{ShortenApiService, shorten_routes};
pub use types::{ApiResponse, HealthResponse, LinksResponse, ShortenRequest, ShortenResponse};
