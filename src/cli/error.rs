//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::FileNotFound(_) => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_exit_codes_follow_sysexits() {
        let bad: CliError =
            ApplicationError::Domain(DomainError::EmptyName("root".into())).into();
        assert_eq!(bad.exit_code(), 65);

        let missing: CliError = ApplicationError::FileNotFound(PathBuf::from("x.toml")).into();
        assert_eq!(missing.exit_code(), 66);

        let config: CliError = ApplicationError::Config {
            message: "nope".into(),
        }
        .into();
        assert_eq!(config.exit_code(), 78);
    }
}
