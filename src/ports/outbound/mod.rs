/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the pacman database, console, files).
pub mod package_query;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_presenter;

pub use package_query::{PackageQuery, QueryFilter};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_presenter::ReportPresenter;
