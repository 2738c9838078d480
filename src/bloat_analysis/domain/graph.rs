use super::PackageName;
use std::collections::{HashMap, HashSet};

/// DependencyGraph aggregate: name-level direct dependency sets.
///
/// Keys are exactly the packages returned by the listing the graph was built
/// from. Dependency sets may reference names that are not keys (virtual or
/// uninstalled dependencies); those are leaves with an implicit empty set.
/// Cycles are valid and expected - pacman databases contain plenty.
///
/// A graph is a snapshot: it is built once per invocation and never updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    direct: HashMap<PackageName, HashSet<PackageName>>,
}

impl DependencyGraph {
    pub fn new(direct: HashMap<PackageName, HashSet<PackageName>>) -> Self {
        Self { direct }
    }

    /// Direct dependencies of a package. A name with no key is a leaf and
    /// yields `None`; callers treat that as the empty set.
    pub fn direct_deps(&self, package: &PackageName) -> Option<&HashSet<PackageName>> {
        self.direct.get(package)
    }

    /// Direct dependency count; zero for unknown names.
    pub fn direct_dep_count(&self, package: &PackageName) -> usize {
        self.direct.get(package).map_or(0, HashSet::len)
    }

    pub fn contains(&self, package: &PackageName) -> bool {
        self.direct.contains_key(package)
    }

    pub fn package_names(&self) -> impl Iterator<Item = &PackageName> {
        self.direct.keys()
    }

    pub fn package_count(&self) -> usize {
        self.direct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }
}
