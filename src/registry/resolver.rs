//! Component dependency resolution.
//!
//! Expands a set of requested components into the full set that must be
//! installed. Dependencies always come before their dependents, and the
//! walk terminates even if the catalog contains a cycle.

use std::collections::HashSet;

use super::index::Registry;

/// Ordered, duplicate-free set of component names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSet {
    names: Vec<String>,
}

impl ResolvedSet {
    /// Names in install order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check if a component is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Components pulled in that were not explicitly requested.
    pub fn extras(&self, requested: &[String]) -> Vec<String> {
        self.names
            .iter()
            .filter(|n| !requested.contains(n))
            .cloned()
            .collect()
    }

    /// Iterate names in install order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }
}

impl IntoIterator for ResolvedSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Resolves transitive component dependencies against a registry.
pub struct DependencyResolver<'a> {
    registry: &'a Registry,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Expand `requested` into the transitive closure of its dependencies.
    ///
    /// Names must already be validated against the registry. Requested names
    /// are visited in the order given; each node's dependencies are emitted
    /// before the node itself.
    pub fn expand(&self, requested: &[String]) -> ResolvedSet {
        let mut visited = HashSet::new();
        let mut order = Vec::new();

        for name in requested {
            self.visit(name, &mut visited, &mut order);
        }

        tracing::debug!(
            requested = requested.len(),
            resolved = order.len(),
            "resolved component dependencies"
        );

        ResolvedSet { names: order }
    }

    fn visit(&self, name: &str, visited: &mut HashSet<String>, order: &mut Vec<String>) {
        // Marked before recursing so a cycle stops here.
        if !visited.insert(name.to_string()) {
            return;
        }

        let Some(def) = self.registry.lookup(name) else {
            unreachable!("component '{name}' passed validation but is not in the registry");
        };

        for dep in &def.dependencies {
            self.visit(dep, visited, order);
        }

        order.push(name.to_string());
    }
}
