use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts and CI distinguish between a failed analysis
/// and bad invocation (clap reports its own errors with code 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced
    Success = 0,
    /// Application error (pacman unavailable, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency ranking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PacweightError {
    #[error("Failed to run pacman: {details}\n\n💡 Hint: pacweight needs a working `pacman` binary on PATH. Are you on an Arch-based system?")]
    PacmanUnavailable { details: String },

    #[error("pacman returned no packages for `pacman {query}`\n\n💡 Hint: Please verify that the local package database is initialized")]
    EmptyPackageList { query: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("All packages were removed by the ignore list\n\n💡 Hint: The report would be empty. Please adjust the --ignore flags or the config file")]
    EverythingIgnored,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_pacman_unavailable_display() {
        let error = PacweightError::PacmanUnavailable {
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to run pacman"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_empty_package_list_display() {
        let error = PacweightError::EmptyPackageList {
            query: "-Qe".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("pacman -Qe"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = PacweightError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_everything_ignored_display() {
        let display = format!("{}", PacweightError::EverythingIgnored);
        assert!(display.contains("ignore list"));
        assert!(display.contains("💡 Hint:"));
    }
}
