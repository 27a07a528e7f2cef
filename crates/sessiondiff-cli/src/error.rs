use thiserror::Error;

use sessiondiff_core::{CoreError, LoadError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] sessiondiff_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("missing input: pass {flag} or set {env}")]
    MissingInput {
        flag: &'static str,
        env: &'static str,
    },

    #[error("security group '{key}' not found")]
    UnknownGroup { key: String },

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<LoadError> for CliError {
    fn from(error: LoadError) -> Self {
        Self::Core(CoreError::Load(error))
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(CoreError::Load(LoadError::Io(_))) | Self::Io(_) => 10,
            Self::Validation(_)
            | Self::Core(_)
            | Self::MissingInput { .. }
            | Self::UnknownGroup { .. } => 2,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
        }
    }
}
