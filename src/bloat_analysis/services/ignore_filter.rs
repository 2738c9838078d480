use crate::bloat_analysis::domain::{DependencyGraph, PackageName};
use std::collections::{HashMap, HashSet};

/// IgnoreFilter - removes user-ignored packages from the analysis.
///
/// Ignored names are erased before any closure is computed: they appear
/// neither as graph keys nor as members of any dependency set, so they can
/// never count toward a ranking or show up in a chain. Matching is by exact
/// name.
#[derive(Debug, Default)]
pub struct IgnoreFilter {
    ignored: HashSet<PackageName>,
}

impl IgnoreFilter {
    pub fn new(ignored: HashSet<PackageName>) -> Self {
        Self { ignored }
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    /// Drops ignored names from a package listing.
    pub fn filter_names(&self, names: HashSet<PackageName>) -> HashSet<PackageName> {
        if self.ignored.is_empty() {
            return names;
        }
        names
            .into_iter()
            .filter(|name| !self.ignored.contains(name))
            .collect()
    }

    /// Drops ignored names from graph keys and from every dependency set.
    pub fn filter_graph(&self, graph: DependencyGraph) -> DependencyGraph {
        if self.ignored.is_empty() {
            return graph;
        }
        let direct: HashMap<PackageName, HashSet<PackageName>> = graph
            .package_names()
            .filter(|name| !self.ignored.contains(*name))
            .map(|name| {
                let deps = graph
                    .direct_deps(name)
                    .map(|deps| {
                        deps.iter()
                            .filter(|dep| !self.ignored.contains(*dep))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                (name.clone(), deps)
            })
            .collect();
        DependencyGraph::new(direct)
    }
}
