//! Catalog configuration.

/// What happens to back-references when an article's author or magazine
/// is reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReassignPolicy {
    /// Replace the reference only. The old endpoint keeps listing the
    /// article and the new endpoint does not list it.
    #[default]
    KeepStale,
    /// Move the article from the old endpoint's list to the new one's.
    Reconcile,
}

/// Configuration for a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Back-reference handling on article reassignment.
    pub reassign: ReassignPolicy,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reassign_policy(mut self, policy: ReassignPolicy) -> Self {
        self.reassign = policy;
        self
    }

    /// Keep both endpoints consistent under reassignment.
    pub fn reconciling() -> Self {
        Self {
            reassign: ReassignPolicy::Reconcile,
        }
    }
}
