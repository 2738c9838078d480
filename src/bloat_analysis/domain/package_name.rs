use crate::shared::Result;
use serde::Serialize;
use std::borrow::Borrow;

/// NewType wrapper for a pacman package name.
///
/// Names are opaque, case-sensitive identifiers. Construction trims
/// surrounding whitespace and rejects the empty string; nothing else is
/// validated, since dependency values routinely reference virtual targets
/// such as `libfoo.so` that never appear as installed packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
