//! Package entity - one entry of the manifest

use crate::domain::value_objects::{Membership, Transport};

/// Default host packages are cloned from
pub const DEFAULT_HOST: &str = "github.com";

/// A source package known to the manifest
///
/// Identity is the name, unique within a manifest. The repository locator
/// is a host plus `org/name` slug, rendered through the selected transport
/// at clone time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    repo: String,
    host: String,
    membership: Membership,
    branch: Option<String>,
    depends_on: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repo: repo.into(),
            host: DEFAULT_HOST.to_string(),
            membership: Membership::default(),
            branch: None,
            depends_on: Vec::new(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_depends_on(mut self, depends_on: Vec<String>) -> Self {
        self.depends_on = depends_on;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    /// Branch to check out, if pinned
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Names of the intra-set packages this one depends on
    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    /// Clone URL under the selected transport.
    ///
    /// Restricted packages always render an SSH URL.
    pub fn clone_url(&self, transport: Transport) -> String {
        transport
            .for_membership(self.membership)
            .clone_url(&self.host, &self.repo)
    }
}
