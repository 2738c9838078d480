use crate::bloat_analysis::domain::PackageName;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One hop of a heaviest-chain walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainLink {
    pub name: PackageName,
    pub closure_size: usize,
    pub direct_count: usize,
}

/// Walks the greedy "heaviest chain" from a starting package.
///
/// Each step moves to the first package in global `ranking` order that is a
/// member of the current package's closure - the globally heaviest
/// direct-or-transitive dependency. The walk stops after `depth` hops, or
/// earlier when no ranked package appears in the current closure.
///
/// This is a diagnostic, not a path search: it answers "what is dragging
/// this package down" one greedy hop at a time, and deliberately does not
/// compute an optimal heaviest path.
///
/// Returns at most `depth + 1` links, the starting package included.
pub fn heaviest_chain(
    start: &PackageName,
    ranking: &[PackageName],
    closures: &HashMap<PackageName, HashSet<PackageName>>,
    direct_counts: &HashMap<PackageName, usize>,
    depth: usize,
) -> Vec<ChainLink> {
    let mut links = Vec::with_capacity(depth + 1);
    let mut current = start.clone();

    for remaining in (0..=depth).rev() {
        links.push(link_for(&current, closures, direct_counts));
        if remaining == 0 {
            break;
        }

        let closure = closures.get(&current);
        let next = ranking
            .iter()
            .find(|candidate| closure.is_some_and(|c| c.contains(*candidate)));
        match next {
            Some(heaviest) => current = heaviest.clone(),
            None => break,
        }
    }

    links
}

fn link_for(
    name: &PackageName,
    closures: &HashMap<PackageName, HashSet<PackageName>>,
    direct_counts: &HashMap<PackageName, usize>,
) -> ChainLink {
    ChainLink {
        name: name.clone(),
        closure_size: closures.get(name).map_or(0, HashSet::len),
        direct_count: direct_counts.get(name).copied().unwrap_or(0),
    }
}
