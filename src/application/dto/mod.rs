/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod rank_report;
mod rank_request;

pub use rank_report::{RankReport, RankedPackage};
pub use rank_request::RankRequest;
