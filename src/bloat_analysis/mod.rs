/// bloat_analysis - the dependency weight bounded context
///
/// Owns the dependency graph model, the pacman record parsing, the
/// concurrent graph build and the closure/chain algorithms.
pub mod domain;
pub mod services;
