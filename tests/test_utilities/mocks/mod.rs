/// Mock implementations for testing
mod mock_package_query;
mod mock_progress_reporter;

pub use mock_package_query::MockPackageQuery;
pub use mock_progress_reporter::MockProgressReporter;
