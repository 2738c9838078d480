/// Domain layer - value objects and the dependency graph aggregate
mod graph;
mod package_name;

pub use graph::DependencyGraph;
pub use package_name::PackageName;
