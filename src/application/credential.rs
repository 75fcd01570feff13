/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Bearer token shared between resource clients
///
/// Cloning a `Credential` clones the handle, not the token: every clone sees
/// a replacement made through any other clone.
#[derive(Clone)]
pub struct Credential {
    token: Arc<RwLock<String>>,
}

impl Credential {
    /// Creates a credential holding `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Returns a snapshot of the current token
    pub async fn token(&self) -> String {
        self.token.read().await.clone()
    }

    /// Replaces the token for every holder of this credential
    pub async fn replace(&self, token: impl Into<String>) {
        *self.token.write().await = token.into();
    }

    /// Whether both handles point at the same token cell
    #[must_use]
    pub fn shares_with(&self, other: &Credential) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .finish()
    }
}
