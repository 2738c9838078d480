use crate::application::dto::{RankReport, RankRequest, RankedPackage};
use crate::bloat_analysis::domain::{DependencyGraph, PackageName};
use crate::bloat_analysis::services::{
    heaviest_chain, rank_by_closure_size, top_explicit, ClosureEngine, GraphBuilder, IgnoreFilter,
};
use crate::ports::outbound::{PackageQuery, ProgressReporter, QueryFilter};
use crate::shared::error::PacweightError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// RankPackagesUseCase - the full listing-to-report workflow
///
/// Orchestrates: package listing, ignore filtering, concurrent graph build,
/// closure computation, ranking and chain walks. Infrastructure comes in
/// through the injected ports; the use case itself never touches pacman or
/// the console directly.
///
/// # Type Parameters
/// * `Q` - PackageQuery implementation
/// * `PR` - ProgressReporter implementation
pub struct RankPackagesUseCase<Q, PR> {
    package_query: Q,
    progress_reporter: PR,
}

impl<Q, PR> RankPackagesUseCase<Q, PR>
where
    Q: PackageQuery + Sync,
    PR: ProgressReporter,
{
    pub fn new(package_query: Q, progress_reporter: PR) -> Self {
        Self {
            package_query,
            progress_reporter,
        }
    }

    /// Executes the ranking use case.
    pub async fn execute(&self, request: RankRequest) -> Result<RankReport> {
        let filter = IgnoreFilter::new(request.ignore.clone());

        // Step 1: list the graph universe and the explicit set. Recursive
        // mode walks the whole database; direct-only mode never needs the
        // automatically installed packages.
        self.progress_reporter
            .report("📖 Listing installed packages...");
        let (universe, explicit) = self.list_package_sets(request.recursive).await?;

        let universe = filter.filter_names(universe);
        let explicit = filter.filter_names(explicit);
        if explicit.is_empty() {
            if filter.is_empty() {
                return Err(PacweightError::EmptyPackageList {
                    query: "-Qe".to_string(),
                }
                .into());
            }
            return Err(PacweightError::EverythingIgnored.into());
        }

        // Step 2: one concurrent describe per package, assembled into the
        // graph snapshot everything downstream works on.
        self.progress_reporter.report(&format!(
            "📦 Querying dependencies of {} package(s)...",
            universe.len()
        ));
        let graph = GraphBuilder::new(&self.package_query)
            .build(universe, &self.progress_reporter)
            .await;
        let graph = filter.filter_graph(graph);
        self.progress_reporter.report_completion(&format!(
            "✅ Dependency graph built over {} package(s)",
            graph.package_count()
        ));

        // Step 3: closures (or plain direct sets), then the global ranking.
        let closures = Self::compute_closures(&graph, request.recursive);
        let direct_counts: HashMap<PackageName, usize> = graph
            .package_names()
            .map(|name| (name.clone(), graph.direct_dep_count(name)))
            .collect();

        let ranking = rank_by_closure_size(&closures);
        let reported = top_explicit(&ranking, &explicit, request.limit);

        // Step 4: assemble report entries, with chains when requested.
        let entries = reported
            .into_iter()
            .map(|name| {
                let chain = if request.chain_depth > 0 {
                    heaviest_chain(
                        &name,
                        &ranking,
                        &closures,
                        &direct_counts,
                        request.chain_depth,
                    )
                } else {
                    Vec::new()
                };
                RankedPackage {
                    closure_size: closures.get(&name).map_or(0, HashSet::len),
                    direct_count: direct_counts.get(&name).copied().unwrap_or(0),
                    name,
                    chain,
                }
            })
            .collect();

        Ok(RankReport::new(
            explicit.len(),
            request.recursive,
            request.limit,
            entries,
        ))
    }

    async fn list_package_sets(
        &self,
        recursive: bool,
    ) -> Result<(HashSet<PackageName>, HashSet<PackageName>)> {
        if recursive {
            let (all, explicit) = tokio::join!(
                self.package_query.list_packages(QueryFilter::All),
                self.package_query
                    .list_packages(QueryFilter::ExplicitlyInstalled)
            );
            Ok((all?.into_iter().collect(), explicit?.into_iter().collect()))
        } else {
            let explicit: HashSet<PackageName> = self
                .package_query
                .list_packages(QueryFilter::ExplicitlyInstalled)
                .await?
                .into_iter()
                .collect();
            Ok((explicit.clone(), explicit))
        }
    }

    fn compute_closures(
        graph: &DependencyGraph,
        recursive: bool,
    ) -> HashMap<PackageName, HashSet<PackageName>> {
        if recursive {
            let engine = ClosureEngine::new(graph);
            graph
                .package_names()
                .map(|name| (name.clone(), engine.closure_of(name)))
                .collect()
        } else {
            graph
                .package_names()
                .map(|name| {
                    let direct = graph.direct_deps(name).cloned().unwrap_or_default();
                    (name.clone(), direct)
                })
                .collect()
        }
    }
}
