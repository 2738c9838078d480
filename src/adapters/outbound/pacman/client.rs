use crate::bloat_analysis::domain::PackageName;
use crate::ports::outbound::{PackageQuery, QueryFilter};
use crate::shared::error::PacweightError;
use crate::shared::Result;
use async_trait::async_trait;
use tokio::process::Command;

const PACMAN_BIN: &str = "pacman";

/// PacmanClient - implements the PackageQuery port over the pacman binary.
///
/// Listing uses `pacman -Q` / `pacman -Qe`; descriptions use
/// `pacman -Qi <name>`. Arguments are passed as a vector, never through a
/// shell, so package names cannot be interpreted by one.
///
/// A describe for a package pacman does not know exits non-zero with empty
/// stdout; that surfaces here as an empty line sequence, which the graph
/// builder degrades to an empty dependency set.
pub struct PacmanClient {
    binary: String,
}

impl PacmanClient {
    pub fn new() -> Self {
        Self {
            binary: PACMAN_BIN.to_string(),
        }
    }

    /// Points the adapter at a different binary. Exists for tests.
    #[cfg(test)]
    fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                PacweightError::PacmanUnavailable {
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl Default for PacmanClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageQuery for PacmanClient {
    async fn list_packages(&self, filter: QueryFilter) -> Result<Vec<PackageName>> {
        let flag = match filter {
            QueryFilter::All => "-Q",
            QueryFilter::ExplicitlyInstalled => "-Qe",
        };
        let output = self.run(&[flag]).await?;
        if !output.status.success() {
            return Err(PacweightError::PacmanUnavailable {
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(parse_listing(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn describe_package(&self, package: &PackageName) -> Result<Vec<String>> {
        let output = self.run(&["-Qi", package.as_str()]).await?;
        // Unknown package: empty lines, not an error.
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// Parses `pacman -Q` style output: one `name version` pair per line. Only
/// the first whitespace-delimited token is the name; blank lines are skipped.
fn parse_listing(stdout: &str) -> Vec<PackageName> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|token| PackageName::new(token).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_takes_first_token() {
        let out = "bash 5.2.026-2\nglibc 2.39-1\n";
        let names = parse_listing(out);
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].as_str(), "bash");
        assert_eq!(names[1].as_str(), "glibc");
    }

    #[test]
    fn test_parse_listing_skips_blank_lines() {
        let out = "bash 5.2.026-2\n\n   \nglibc 2.39-1\n";
        assert_eq!(parse_listing(out).len(), 2);
    }

    #[test]
    fn test_parse_listing_empty_output() {
        assert!(parse_listing("").is_empty());
    }

    #[tokio::test]
    async fn test_list_packages_missing_binary_is_fatal() {
        let client = PacmanClient::with_binary("/nonexistent/pacman-test-binary");
        let result = client.list_packages(QueryFilter::All).await;
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Failed to run pacman"));
    }

    #[tokio::test]
    async fn test_describe_missing_binary_is_an_error() {
        // Spawn failure is an error; the graph builder is the layer that
        // degrades it to an empty dependency set.
        let client = PacmanClient::with_binary("/nonexistent/pacman-test-binary");
        let name = PackageName::new("bash").unwrap();
        assert!(client.describe_package(&name).await.is_err());
    }
}
