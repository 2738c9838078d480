use crate::bloat_analysis::domain::PackageName;
use crate::bloat_analysis::services::ChainLink;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One reported package with its dependency weight.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPackage {
    pub name: PackageName,
    /// Size of the dependency closure (direct count in non-recursive mode).
    pub closure_size: usize,
    /// Number of direct dependencies.
    pub direct_count: usize,
    /// Greedy heaviest-chain walk, empty when chains were not requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<ChainLink>,
}

/// RankReport - the finished ranking, ready for a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    /// Number of explicitly installed packages after ignore filtering.
    pub total_explicit: usize,
    /// Whether closure sizes are transitive or direct-only.
    pub recursive: bool,
    /// The requested result count. `entries` may hold fewer when the
    /// system has fewer explicit packages than were asked for.
    pub limit: usize,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<RankedPackage>,
}

impl RankReport {
    pub fn new(
        total_explicit: usize,
        recursive: bool,
        limit: usize,
        entries: Vec<RankedPackage>,
    ) -> Self {
        Self {
            total_explicit,
            recursive,
            limit,
            generated_at: Utc::now(),
            entries,
        }
    }
}
