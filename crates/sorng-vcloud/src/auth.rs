//! Authentication context.
//!
//! Logging in is somebody else's job: an [`AuthProvider`] only hands out the
//! header that proves an existing session, fresh for every exchange.

use crate::error::VcdResult;

use std::fmt;

/// Session proof attached to a request (`name: value`).
#[derive(Clone, PartialEq, Eq)]
pub struct AuthAttachment {
    pub header: String,
    pub value: String,
}

impl AuthAttachment {
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for AuthAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthAttachment")
            .field("header", &self.header)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Supplies the current auth attachment. Implementations may refresh tokens
/// behind the scenes; callers never cache the result.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Name of this auth mechanism.
    fn name(&self) -> &str;

    async fn attachment(&self) -> VcdResult<AuthAttachment>;
}

// ── vCloud session token ────────────────────────────────────────────

/// `x-vcloud-authorization` token returned by `POST /api/sessions`.
pub struct VCloudToken {
    token: String,
}

impl VCloudToken {
    pub const HEADER: &'static str = "x-vcloud-authorization";

    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for VCloudToken {
    fn name(&self) -> &str {
        "vcloud-token"
    }

    async fn attachment(&self) -> VcdResult<AuthAttachment> {
        Ok(AuthAttachment::new(Self::HEADER, self.token.clone()))
    }
}

// ── Bearer ──────────────────────────────────────────────────────────

/// `Authorization: Bearer …` for deployments fronted by an OAuth gateway.
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for BearerToken {
    fn name(&self) -> &str {
        "bearer"
    }

    async fn attachment(&self) -> VcdResult<AuthAttachment> {
        Ok(AuthAttachment::new(
            "Authorization",
            format!("Bearer {}", self.token),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn vcloud_token_uses_session_header() {
        let a = VCloudToken::new("abc123").attachment().await.unwrap();
        assert_eq!(a.header, "x-vcloud-authorization");
        assert_eq!(a.value, "abc123");
    }

    #[tokio::test]
    async fn bearer_token_prefixes_scheme() {
        let a = BearerToken::new("jwt").attachment().await.unwrap();
        assert_eq!(a.header, "Authorization");
        assert_eq!(a.value, "Bearer jwt");
    }

    #[test]
    fn debug_output_hides_secret() {
        let a = AuthAttachment::new("x-vcloud-authorization", "s3cret");
        assert!(!format!("{a:?}").contains("s3cret"));
    }
}
