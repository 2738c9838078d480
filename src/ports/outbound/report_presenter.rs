use crate::shared::Result;

/// ReportPresenter port for delivering the rendered report
///
/// Implementations write to stdout or to a file chosen on the command line.
pub trait ReportPresenter {
    /// Presents the formatted report content.
    ///
    /// # Errors
    /// Returns an error if the output sink cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
