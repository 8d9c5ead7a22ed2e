//! Process-wide registry of drawing capabilities.
//!
//! Controllers, elements, scales and plugins are registered once per process
//! before the first chart is built. Registration goes through a one-time
//! cell, so concurrent or repeated calls can never register twice.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    Controller,
    Element,
    Scale,
    Plugin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Capability {
    pub kind: CapabilityKind,
    pub id: &'static str,
}

impl Capability {
    const fn new(kind: CapabilityKind, id: &'static str) -> Self {
        Self { kind, id }
    }
}

/// Everything a line chart needs: the controller, its point and line
/// elements, category and linear scales, and the legend plugin.
pub const BUILTIN_CAPABILITIES: [Capability; 6] = [
    Capability::new(CapabilityKind::Controller, "line"),
    Capability::new(CapabilityKind::Element, "point"),
    Capability::new(CapabilityKind::Element, "line"),
    Capability::new(CapabilityKind::Scale, "category"),
    Capability::new(CapabilityKind::Scale, "linear"),
    Capability::new(CapabilityKind::Plugin, "legend"),
];

static REGISTRY: OnceCell<Vec<Capability>> = OnceCell::new();

/// Registers the built-in capabilities if no call has done so yet.
///
/// Returns `true` only for the call that performed the registration.
pub fn ensure_registered() -> bool {
    let mut performed = false;
    REGISTRY.get_or_init(|| {
        performed = true;
        debug!(
            count = BUILTIN_CAPABILITIES.len(),
            "register built-in chart capabilities"
        );
        BUILTIN_CAPABILITIES.to_vec()
    });
    performed
}

/// Registered capabilities; empty until [`ensure_registered`] has run.
#[must_use]
pub fn registered_capabilities() -> &'static [Capability] {
    match REGISTRY.get() {
        Some(capabilities) => capabilities,
        None => &[],
    }
}

#[must_use]
pub fn is_registered(kind: CapabilityKind, id: &str) -> bool {
    registered_capabilities()
        .iter()
        .any(|capability| capability.kind == kind && capability.id == id)
}
