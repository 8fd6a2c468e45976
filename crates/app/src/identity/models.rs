//! Identity models.

use std::fmt;

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User marker; users live outside this crate and are referenced by id only.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Opaque session credential presented by a caller.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(**redacted**)")
    }
}

/// A session known to the identity service.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Session {
    pub user: UserUuid,
    pub expires_at: Option<Timestamp>,
}

impl Session {
    pub(crate) fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_credential() {
        let credential = SessionCredential::new("cs_super_secret");

        assert_eq!(format!("{credential:?}"), "SessionCredential(**redacted**)");
        assert_eq!(credential.expose(), "cs_super_secret");
    }
}
