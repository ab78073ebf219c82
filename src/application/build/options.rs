//! Build Options
//!
//! Configuration types for the build use case.

use crate::domain::value_objects::{MembershipMode, Transport};

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Whether restricted packages are included
    pub membership: MembershipMode,
    /// Transport used to clone open packages (restricted ones always use SSH)
    pub transport: Transport,
    /// Fast mode: disable build isolation during installs
    pub fast: bool,
    /// Hide system site packages and force fresh installs
    pub ignore_system_packages: bool,
    /// Use the legacy editable install layout
    pub compat_editable: bool,
    /// Shell prompt prefix for the environment
    pub prompt: String,
    /// Package names excluded from the build by the user
    pub excludes: Vec<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self {
            membership: MembershipMode::Member,
            transport: Transport::Ssh,
            fast: false,
            ignore_system_packages: false,
            compat_editable: false,
            prompt: "venv".to_string(),
            excludes: Vec::new(),
        }
    }

    pub fn with_membership(mut self, membership: MembershipMode) -> Self {
        self.membership = membership;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }

    pub fn with_ignore_system_packages(mut self, ignore: bool) -> Self {
        self.ignore_system_packages = ignore;
        self
    }

    pub fn with_compat_editable(mut self, compat: bool) -> Self {
        self.compat_editable = compat;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}
