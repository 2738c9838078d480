use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use pacweight::prelude::*;

/// Mock PackageQuery serving an in-memory package database.
///
/// Descriptions are stored as the raw record lines a real query would
/// print, so the parsing path is exercised end to end.
pub struct MockPackageQuery {
    all: Vec<String>,
    explicit: Vec<String>,
    descriptions: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    fail_listing: bool,
}

impl MockPackageQuery {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            explicit: Vec::new(),
            descriptions: HashMap::new(),
            failing: HashSet::new(),
            fail_listing: false,
        }
    }

    /// Registers a package with the given direct dependencies. Explicitly
    /// installed packages appear in both listings.
    pub fn with_package(mut self, name: &str, explicit: bool, deps: &[&str]) -> Self {
        self.all.push(name.to_string());
        if explicit {
            self.explicit.push(name.to_string());
        }
        self.descriptions
            .insert(name.to_string(), describe_record(name, deps));
        self
    }

    /// Makes `describe_package` fail for the given name.
    pub fn with_describe_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Makes every listing call fail.
    pub fn with_listing_failure() -> Self {
        Self {
            fail_listing: true,
            ..Self::new()
        }
    }
}

impl Default for MockPackageQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageQuery for MockPackageQuery {
    async fn list_packages(&self, filter: QueryFilter) -> Result<Vec<PackageName>> {
        if self.fail_listing {
            anyhow::bail!("Mock package database failure");
        }
        let names = match filter {
            QueryFilter::All => &self.all,
            QueryFilter::ExplicitlyInstalled => &self.explicit,
        };
        names.iter().map(PackageName::new).collect()
    }

    async fn describe_package(&self, package: &PackageName) -> Result<Vec<String>> {
        if self.failing.contains(package.as_str()) {
            anyhow::bail!("Mock describe failure for {}", package);
        }
        // Unknown packages produce no record lines, matching a query for a
        // package that is not installed.
        Ok(self
            .descriptions
            .get(package.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

/// Builds record lines in the `Key : Value` layout pacman -Qi prints.
fn describe_record(name: &str, deps: &[&str]) -> Vec<String> {
    let depends = if deps.is_empty() {
        "None".to_string()
    } else {
        deps.join("  ")
    };
    vec![
        format!("Name            : {}", name),
        "Version         : 1.0.0-1".to_string(),
        format!("Depends On      : {}", depends),
        "Install Reason  : Explicitly installed".to_string(),
    ]
}
