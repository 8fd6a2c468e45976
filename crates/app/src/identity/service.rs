//! Identity service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::identity::{IdentityError, Session, SessionCredential, UserUuid};

/// Prefix for credentials minted by [`InMemoryIdentityService::open_session`].
pub const SESSION_CREDENTIAL_PREFIX: &str = "cs";

/// Session table held in memory, for local runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryIdentityService {
    sessions: RwLock<FxHashMap<SessionCredential, Session>>,
}

impl InMemoryIdentityService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `credential` as identifying `user` until `expires_at`.
    pub async fn register_session(
        &self,
        credential: SessionCredential,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) {
        self.sessions
            .write()
            .await
            .insert(credential, Session { user, expires_at });
    }

    /// Register a session under a freshly generated credential.
    pub async fn open_session(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> SessionCredential {
        let credential = SessionCredential::new(format!(
            "{SESSION_CREDENTIAL_PREFIX}_{}",
            Uuid::now_v7().simple()
        ));

        self.register_session(credential.clone(), user, expires_at)
            .await;

        credential
    }

    /// Forget a session. Returns `true` if it existed.
    pub async fn end_session(&self, credential: &SessionCredential) -> bool {
        self.sessions.write().await.remove(credential).is_some()
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn resolve_identity(
        &self,
        credential: &SessionCredential,
    ) -> Result<UserUuid, IdentityError> {
        let session = self
            .sessions
            .read()
            .await
            .get(credential)
            .copied()
            .ok_or(IdentityError::InvalidCredential)?;

        if session.is_expired_at(Timestamp::now()) {
            return Err(IdentityError::Expired);
        }

        Ok(session.user)
    }
}

#[automock]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Resolve the user a credential belongs to.
    async fn resolve_identity(
        &self,
        credential: &SessionCredential,
    ) -> Result<UserUuid, IdentityError>;
}
