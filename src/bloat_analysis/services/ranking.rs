use crate::bloat_analysis::domain::PackageName;
use std::collections::{HashMap, HashSet};

/// Orders every package by descending closure size.
///
/// Ties break on ascending name so the report is deterministic run to run;
/// hash iteration order must never leak into the output.
pub fn rank_by_closure_size(
    closures: &HashMap<PackageName, HashSet<PackageName>>,
) -> Vec<PackageName> {
    let mut ranking: Vec<&PackageName> = closures.keys().collect();
    ranking.sort_by(|a, b| {
        let weight_a = closures[*a].len();
        let weight_b = closures[*b].len();
        weight_b.cmp(&weight_a).then_with(|| a.cmp(b))
    });
    ranking.into_iter().cloned().collect()
}

/// Cuts a global ranking down to the reported list: explicitly installed
/// packages only, at most `limit` entries.
///
/// Dependencies pulled in automatically still shape the global order (the
/// chain walk needs them) but the user asked which of *their* packages are
/// heavy, so only the explicit set is reported.
pub fn top_explicit(
    ranking: &[PackageName],
    explicit: &HashSet<PackageName>,
    limit: usize,
) -> Vec<PackageName> {
    ranking
        .iter()
        .filter(|name| explicit.contains(*name))
        .take(limit)
        .cloned()
        .collect()
}
