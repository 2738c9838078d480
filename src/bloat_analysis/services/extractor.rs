use crate::bloat_analysis::domain::PackageName;
use std::collections::HashMap;

/// Separator between dependency tokens in pacman's `Depends On` value.
///
/// pacman pads version-qualified entries with single spaces, so splitting on
/// a single space would shred tokens like `electron  libx11>=1.6`. The
/// double space is load-bearing.
const DEPENDS_SEPARATOR: &str = "  ";

/// Record key (normalized) whose value lists direct dependencies.
const DEPENDS_KEY: &str = "depends on";

/// Value pacman prints when a package has no dependencies at all.
const NO_DEPENDS_SENTINEL: &str = "None";

/// Extracts the direct dependency set from one package's `pacman -Qi` lines.
///
/// The input is a sequence of colon-separated `Key : Value` records. Keys
/// match case-insensitively after trimming. Anything malformed - lines
/// without a colon, a missing `Depends On` record, an empty value - is
/// treated as "no dependencies", never as an error: one unreadable package
/// must not abort the ranking of all the others.
///
/// Version qualifiers (`>=`, `=`, `<` ...) are stripped from each token so
/// every version of a name collapses to a single graph node.
pub fn extract_dependencies(lines: &[String]) -> std::collections::HashSet<PackageName> {
    let records: HashMap<String, &str> = lines
        .iter()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim()))
        .collect();

    let Some(value) = records.get(DEPENDS_KEY) else {
        return Default::default();
    };
    if value.is_empty() || *value == NO_DEPENDS_SENTINEL {
        return Default::default();
    }

    value
        .split(DEPENDS_SEPARATOR)
        .map(strip_version_qualifier)
        .filter_map(|token| PackageName::new(token).ok())
        .collect()
}

/// Cuts a dependency token at the first version-constraint character.
///
/// `glibc>=2.33` and `glibc` both name the `glibc` node.
fn strip_version_qualifier(token: &str) -> &str {
    match token.find(['>', '<', '=']) {
        Some(pos) => &token[..pos],
        None => token,
    }
}
