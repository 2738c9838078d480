use crate::bloat_analysis::domain::PackageName;
use std::collections::HashSet;

/// RankRequest - Internal request DTO for the ranking use case
///
/// Carries the configuration surface the CLI layer resolved from flags and
/// the config file.
#[derive(Debug, Clone)]
pub struct RankRequest {
    /// Maximum number of packages in the final report.
    pub limit: usize,
    /// Rank by transitive closure size instead of direct dependency count.
    pub recursive: bool,
    /// Packages erased from the analysis before anything is computed.
    pub ignore: HashSet<PackageName>,
    /// Heaviest-chain hops to attach to each entry; 0 disables chains.
    pub chain_depth: usize,
}

impl RankRequest {
    pub fn new(
        limit: usize,
        recursive: bool,
        ignore: HashSet<PackageName>,
        chain_depth: usize,
    ) -> Self {
        Self {
            limit,
            recursive,
            ignore,
            chain_depth,
        }
    }
}
