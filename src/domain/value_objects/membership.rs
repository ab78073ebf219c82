//! Membership value object - classifies packages for filtering
//!
//! - `Open` packages are publicly cloneable
//! - `Restricted` packages require authenticated (member) access

use serde::{Deserialize, Serialize};

/// Membership tag of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    /// Publicly accessible repository
    #[default]
    Open,
    /// Members-only repository (always cloned over SSH)
    Restricted,
}

impl Membership {
    /// Returns true if this package requires member access
    pub fn is_restricted(&self) -> bool {
        matches!(self, Membership::Restricted)
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Membership::Open => write!(f, "open"),
            Membership::Restricted => write!(f, "restricted"),
        }
    }
}

/// Whether the invoking user is a member with access to restricted packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipMode {
    /// Include restricted packages
    #[default]
    Member,
    /// Open packages only
    NonMember,
}

impl MembershipMode {
    /// Returns true if a package with the given tag is admitted to the build
    pub fn admits(&self, membership: Membership) -> bool {
        match self {
            MembershipMode::Member => true,
            MembershipMode::NonMember => !membership.is_restricted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_default_is_open() {
        assert_eq!(Membership::default(), Membership::Open);
    }

    #[test]
    fn membership_is_restricted() {
        assert!(Membership::Restricted.is_restricted());
        assert!(!Membership::Open.is_restricted());
    }

    #[test]
    fn membership_display() {
        assert_eq!(format!("{}", Membership::Open), "open");
        assert_eq!(format!("{}", Membership::Restricted), "restricted");
    }

    #[test]
    fn membership_serde_roundtrip() {
        let json = serde_json::to_string(&Membership::Restricted).unwrap();
        assert_eq!(json, "\"restricted\"");
        let parsed: Membership = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Membership::Restricted);
    }

    #[test]
    fn member_mode_admits_everything() {
        assert!(MembershipMode::Member.admits(Membership::Open));
        assert!(MembershipMode::Member.admits(Membership::Restricted));
    }

    #[test]
    fn non_member_mode_rejects_restricted() {
        assert!(MembershipMode::NonMember.admits(Membership::Open));
        assert!(!MembershipMode::NonMember.admits(Membership::Restricted));
    }
}
