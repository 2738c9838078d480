/// Use cases orchestrating domain services through ports
mod rank_packages;

pub use rank_packages::RankPackagesUseCase;
