//! Transport value object - how repositories are cloned
//!
//! Clone URLs are rendered from a host plus an `org/name` slug, so the same
//! manifest entry works over either protocol.

use serde::{Deserialize, Serialize};

use super::Membership;

/// Version control transport used for cloning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Authenticated SSH (`ssh://git@host/org/name`)
    Ssh,
    /// Anonymous HTTPS (`https://host/org/name.git`)
    Https,
}

impl Transport {
    /// Render a clone URL for the given host and repository slug
    pub fn clone_url(&self, host: &str, repo: &str) -> String {
        match self {
            Transport::Ssh => format!("ssh://git@{}/{}", host, repo),
            Transport::Https => format!("https://{}/{}.git", host, repo),
        }
    }

    /// Effective transport for a package with the given membership tag.
    ///
    /// Restricted repositories require authentication, so they are always
    /// cloned over SSH regardless of the selected transport.
    pub fn for_membership(&self, membership: Membership) -> Transport {
        if membership.is_restricted() {
            Transport::Ssh
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Ssh => write!(f, "ssh"),
            Transport::Https => write!(f, "https"),
        }
    }
}
