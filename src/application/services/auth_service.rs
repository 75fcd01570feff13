use crate::application::config::Config;
use crate::application::credential::Credential;
use crate::application::interfaces::auth::AuthService;
use crate::application::resource::ResourceClient;
use crate::constants::{AUTH_SEGMENT, PASSWORD_GRANT_TYPE};
use crate::error::AppError;
use crate::model::http::build_form_request;
use crate::model::response::ResponseBody;
use async_trait::async_trait;
use reqwest::Client;

/// Client for `/auth/v1/oauth`
///
/// Holds its own copy of the token it was built with. The facade never rotates
/// it, since the only operation here issues tokens instead of consuming one.
#[derive(Debug, Clone)]
pub struct AuthServiceImpl {
    resource: ResourceClient,
}

impl AuthServiceImpl {
    /// Creates the authentication client
    pub fn new(http: Client, config: &Config, token: &str) -> Self {
        Self {
            resource: ResourceClient::new(http, config, AUTH_SEGMENT, Credential::new(token)),
        }
    }

    /// Base URL of the authentication resource
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.resource.base_url()
    }

    /// Replaces the token held by this client only
    pub async fn update_token(&self, token: &str) {
        self.resource.update_token(token).await;
    }

    /// Returns the token held by this client
    pub async fn token(&self) -> String {
        self.resource.credential().token().await
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn validate_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ResponseBody, AppError> {
        let request = build_form_request(
            format!("{}/token", self.resource.base_url()),
            vec![
                ("grant_type".to_string(), PASSWORD_GRANT_TYPE.to_string()),
                ("username".to_string(), username.to_string()),
                ("password".to_string(), password.to_string()),
            ],
        );

        self.resource.send(request).await
    }
}
