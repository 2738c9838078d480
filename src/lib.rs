//! pacweight - dependency weight ranking for pacman packages
//!
//! This library ranks explicitly installed pacman packages by the number of
//! packages they pull into the system, either directly or through their full
//! transitive dependency closure. It follows hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bloat_analysis`): Pure graph and ranking logic
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pacweight::prelude::*;
//! use std::collections::HashSet;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let package_query = PacmanClient::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RankPackagesUseCase::new(package_query, progress_reporter);
//!
//! // Execute
//! let request = RankRequest::new(10, true, HashSet::new(), 0);
//! let report = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = TextFormatter::new();
//! let output = formatter.format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bloat_analysis;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::pacman::PacmanClient;
    pub use crate::application::dto::{RankReport, RankRequest, RankedPackage};
    pub use crate::application::use_cases::RankPackagesUseCase;
    pub use crate::bloat_analysis::domain::{DependencyGraph, PackageName};
    pub use crate::bloat_analysis::services::{ChainLink, ClosureEngine, GraphBuilder};
    pub use crate::ports::outbound::{
        PackageQuery, ProgressReporter, QueryFilter, ReportFormatter, ReportPresenter,
    };
    pub use crate::shared::Result;
}
