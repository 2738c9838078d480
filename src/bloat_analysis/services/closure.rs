use crate::bloat_analysis::domain::{DependencyGraph, PackageName};
use dashmap::DashMap;
use std::collections::HashSet;

/// Recursion ceiling. The longest acyclic chain in a real pacman database
/// is well under a hundred packages; anything deeper is truncated to the
/// package's direct dependencies with a warning instead of blowing the stack.
const MAX_RECURSION_DEPTH: usize = 512;

/// ClosureEngine: transitive dependency closure over one graph snapshot.
///
/// The closure of a package is every name reachable through the dependency
/// relation. Self is excluded unless a cycle leads back to it, in which case
/// it was encountered as an ordinary dependency edge and is included.
///
/// Results are memoized per engine instance. The cache is keyed by name
/// only, so an engine must never be reused across graphs - build a new
/// engine for a new graph.
///
/// The cycle guard is scoped to each top-level `closure_of` call: a fresh
/// visited set is threaded through the recursion, so answers are independent
/// of what was queried before. A package already seen in the current
/// traversal returns just its direct dependencies, which both terminates
/// cycles and still reports the immediate edge. Such truncated expansions
/// are valid only inside their own traversal, so only completed top-level
/// results enter the memo cache; cached entries are therefore always full
/// reachability sets and safe to splice into any later traversal.
pub struct ClosureEngine<'g> {
    graph: &'g DependencyGraph,
    cache: DashMap<PackageName, HashSet<PackageName>>,
}

impl<'g> ClosureEngine<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            cache: DashMap::new(),
        }
    }

    /// The full direct-plus-transitive dependency set of `package`.
    ///
    /// Unknown names are leaves: their closure is empty.
    pub fn closure_of(&self, package: &PackageName) -> HashSet<PackageName> {
        if let Some(cached) = self.cache.get(package) {
            return cached.clone();
        }

        let mut visited = HashSet::new();
        let closure = self.expand(package, &mut visited, 0);
        self.cache.insert(package.clone(), closure.clone());
        closure
    }

    fn expand(
        &self,
        package: &PackageName,
        visited: &mut HashSet<PackageName>,
        depth: usize,
    ) -> HashSet<PackageName> {
        if let Some(cached) = self.cache.get(package) {
            return cached.clone();
        }

        let direct: HashSet<PackageName> = self
            .graph
            .direct_deps(package)
            .cloned()
            .unwrap_or_default();

        // Cycle guard: this package is already being expanded somewhere up
        // the traversal. Report the immediate edges without recursing.
        if visited.contains(package) {
            return direct;
        }

        if depth >= MAX_RECURSION_DEPTH {
            eprintln!(
                "⚠️  Warning: dependency chain deeper than {} at '{}', truncating",
                MAX_RECURSION_DEPTH, package
            );
            return direct;
        }

        visited.insert(package.clone());

        let mut closure = direct.clone();
        for dep in &direct {
            closure.extend(self.expand(dep, visited, depth + 1));
        }
        closure
    }
}
