//! Shared host-bundle and capability models for runtime composition.

use std::rc::Rc;

use crate::{
    ContentGenerationService, IdentityProvider, NoopIdentityProvider, UnconfiguredGenerationService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition without browser services (native tests and tooling).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
    /// Capability exists but is missing configuration (for example an API key).
    RequiresConfiguration,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// External identity provider availability.
    pub identity: CapabilityStatus,
    /// AI document generation availability.
    pub generation: CapabilityStatus,
}

impl HostCapabilities {
    /// Capability posture with no external collaborators.
    pub const fn headless() -> Self {
        Self {
            identity: CapabilityStatus::Unavailable,
            generation: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`.
#[derive(Clone)]
pub struct HostServices {
    /// Identity provider collaborator.
    pub identity: Rc<dyn IdentityProvider>,
    /// AI document-generation collaborator.
    pub generation: Rc<dyn ContentGenerationService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle with inert collaborators, used by native builds and tests.
    pub fn headless() -> Self {
        Self {
            identity: Rc::new(NoopIdentityProvider),
            generation: Rc::new(UnconfiguredGenerationService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
