use crate::error::AppError;
use crate::model::response::ResponseBody;
use async_trait::async_trait;

/// Interface for the OAuth authentication resource
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges a username and password for a token
    ///
    /// Sends a form-encoded `POST /token` with `grant_type=password`. No bearer
    /// header is attached to this call.
    async fn validate_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ResponseBody, AppError>;
}
