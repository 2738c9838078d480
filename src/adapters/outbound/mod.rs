/// Outbound adapters - concrete implementations of the driven ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod pacman;

pub use console::StderrProgressReporter;
pub use filesystem::{FileWriter, StdoutPresenter};
pub use formatters::{JsonFormatter, TextFormatter};
pub use pacman::PacmanClient;
