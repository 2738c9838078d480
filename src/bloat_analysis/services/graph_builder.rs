use crate::bloat_analysis::domain::{DependencyGraph, PackageName};
use crate::bloat_analysis::services::extractor::extract_dependencies;
use crate::ports::outbound::{PackageQuery, ProgressReporter};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::timeout;

/// Per-query deadline. A wedged pacman invocation must not hang the whole
/// build; on expiry the package degrades to an empty dependency set.
const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// GraphBuilder: assembles a [`DependencyGraph`] from the package database.
///
/// One describe query is issued per package, all of them fanned out at once
/// and joined before the graph is returned - the wall-clock cost is
/// dominated by subprocess latency, not computation, so serializing the
/// queries would be the worst possible schedule. No query outlives `build`.
///
/// Failures are per-package and best-effort: an errored, timed-out or
/// unparseable query yields an empty dependency set and a warning, never an
/// aborted build.
pub struct GraphBuilder<'a, Q: PackageQuery + Sync> {
    query: &'a Q,
}

impl<'a, Q: PackageQuery + Sync> GraphBuilder<'a, Q> {
    pub fn new(query: &'a Q) -> Self {
        Self { query }
    }

    /// Builds the dependency graph over the given package universe.
    ///
    /// Completion order is irrelevant: results are combined into an
    /// unordered map, so the graph is identical whether the queries finish
    /// concurrently or one by one.
    pub async fn build<PR: ProgressReporter>(
        &self,
        names: HashSet<PackageName>,
        reporter: &PR,
    ) -> DependencyGraph {
        let total = names.len();
        let completed = AtomicUsize::new(0);

        let queries = names.into_iter().map(|name| {
            let completed = &completed;
            async move {
                let deps = self.dependencies_or_empty(&name, reporter).await;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.report_progress(done, total, Some("querying package metadata"));
                (name, deps)
            }
        });

        DependencyGraph::new(join_all(queries).await.into_iter().collect())
    }

    async fn dependencies_or_empty<PR: ProgressReporter>(
        &self,
        name: &PackageName,
        reporter: &PR,
    ) -> HashSet<PackageName> {
        match timeout(QUERY_TIMEOUT, self.query.describe_package(name)).await {
            Ok(Ok(lines)) => extract_dependencies(&lines),
            Ok(Err(e)) => {
                reporter.report_error(&format!(
                    "⚠️  Warning: could not query '{}', treating it as dependency-free: {}",
                    name, e
                ));
                HashSet::new()
            }
            Err(_) => {
                reporter.report_error(&format!(
                    "⚠️  Warning: query for '{}' timed out after {}s, treating it as dependency-free",
                    name,
                    QUERY_TIMEOUT.as_secs()
                ));
                HashSet::new()
            }
        }
    }
}
