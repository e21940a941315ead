//! User domain entity and account status.

use chrono::{DateTime, Utc};

use crate::config::{STATUS_DISABLED, STATUS_LOCKED, STATUS_NORMAL};

/// Account status enumeration.
///
/// Stored as its uppercase string form. Unknown strings from storage map
/// to `Disabled` so that a mangled row can never log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Normal,
    Locked,
    Disabled,
}

impl UserStatus {
    /// Only accounts in good standing may authenticate.
    pub fn allows_login(&self) -> bool {
        matches!(self, UserStatus::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Normal => STATUS_NORMAL,
            UserStatus::Locked => STATUS_LOCKED,
            UserStatus::Disabled => STATUS_DISABLED,
        }
    }
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_NORMAL => UserStatus::Normal,
            STATUS_LOCKED => UserStatus::Locked,
            _ => UserStatus::Disabled,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the account may authenticate.
    pub fn is_active(&self) -> bool {
        self.status.allows_login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [UserStatus::Normal, UserStatus::Locked, UserStatus::Disabled] {
            assert_eq!(UserStatus::from(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_fails_closed() {
        let status = UserStatus::from("ENABLED?");
        assert_eq!(status, UserStatus::Disabled);
        assert!(!status.allows_login());
    }

    #[test]
    fn only_normal_accounts_log_in() {
        assert!(UserStatus::Normal.allows_login());
        assert!(!UserStatus::Locked.allows_login());
        assert!(!UserStatus::Disabled.allows_login());
    }
}
