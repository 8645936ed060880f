//! Pure install planning: selection, validation and dependency expansion.

use crate::error::Result;
use crate::registry::{DependencyResolver, Registry, ResolvedSet};

/// How the user chose which components to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit component names.
    Named(Vec<String>),
    /// Every component in the registry.
    All,
    /// Pick interactively.
    Interactive,
}

impl Selection {
    /// Build a selection from `add` arguments. `--all` wins over names.
    pub fn from_args(names: &[String], all: bool) -> Self {
        if all {
            Self::All
        } else if names.is_empty() {
            Self::Interactive
        } else {
            Self::Named(names.to_vec())
        }
    }
}

/// The validated, dependency-expanded result of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Components the user asked for, in request order.
    pub requested: Vec<String>,

    /// Requested components plus their dependencies, dependencies first.
    pub resolved: ResolvedSet,

    /// Components pulled in only as dependencies.
    pub extras: Vec<String>,
}

impl InstallPlan {
    /// Whether extra dependencies should be confirmed before writing.
    pub fn needs_confirmation(&self) -> bool {
        !self.extras.is_empty()
    }

    /// External packages needed by this plan, baseline first.
    pub fn packages(&self, registry: &Registry) -> Vec<String> {
        super::packages::aggregate_packages(registry, &self.resolved)
    }
}

/// Validate `requested` against the registry and expand dependencies.
///
/// Fails with `InvalidComponentName` listing every unknown name.
pub fn plan(registry: &Registry, requested: &[String]) -> Result<InstallPlan> {
    registry.validate_names(requested)?;

    let resolved = DependencyResolver::new(registry).expand(requested);
    let extras = resolved.extras(requested);
    tracing::debug!(requested = ?requested, resolved = ?resolved.names(), "planned install");

    Ok(InstallPlan {
        requested: requested.to_vec(),
        resolved,
        extras,
    })
}
