use crate::bloat_analysis::domain::PackageName;
use crate::shared::Result;
use async_trait::async_trait;

/// Which slice of the package database a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFilter {
    /// Every installed package, dependencies included (`pacman -Q`).
    All,
    /// Only packages the user installed explicitly (`pacman -Qe`).
    ExplicitlyInstalled,
}

/// PackageQuery port for reading the external package database
///
/// This port abstracts the pacman subprocess calls so the graph engine can
/// be exercised against in-memory fakes. Queries have real latency (process
/// spawn plus I/O), which is why callers fan them out concurrently.
#[async_trait]
pub trait PackageQuery {
    /// Lists installed package names.
    ///
    /// Only the first whitespace-delimited token of each output line is a
    /// name; blank lines are skipped.
    ///
    /// # Errors
    /// Returns an error if the package database cannot be queried at all.
    /// This is the only query failure the application treats as fatal.
    async fn list_packages(&self, filter: QueryFilter) -> Result<Vec<PackageName>>;

    /// Returns the raw colon-separated record lines describing one package.
    ///
    /// A package that is not installed yields an empty line sequence, not
    /// an error; the caller degrades it to an empty dependency set.
    async fn describe_package(&self, package: &PackageName) -> Result<Vec<String>>;
}
