//! User role enum.

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user by the backend.
///
/// The backend emits roles as plain strings; anything it invents that we
/// don't know about lands in `Unknown` rather than failing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular customer account.
    #[default]
    User,
    /// Back-office administrator.
    Admin,
    /// A role string the client does not recognize.
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Parse a role from the backend's string form, case-insensitively.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            _ => Self::Unknown,
        }
    }

    /// Whether this role grants access to the admin surface.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_lossy() {
        assert_eq!(UserRole::from_str_lossy("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_lossy("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_lossy("user"), UserRole::User);
        assert_eq!(UserRole::from_str_lossy("superuser"), UserRole::Unknown);
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }
}
