/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here: the package database query,
/// progress reporting, report formatting and output presentation.
pub mod outbound;
