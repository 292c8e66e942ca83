use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when an external program cannot be started at all.
pub const COMMAND_NOT_FOUND_EXIT_CODE: i32 = 127;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configureBclToFastq failed with exit code {code}")]
    ConfigureFailed { code: i32 },
    #[error("bcl to fastq conversion failed with exit code {code}")]
    BuildFailed { code: i32 },
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to change directory to {}: {source}", path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to return to directory {}: {source}", path.display())]
    RestoreDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Process exit status the driver should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::ConfigureFailed { code } | PipelineError::BuildFailed { code } => *code,
            PipelineError::Spawn { .. } => COMMAND_NOT_FOUND_EXIT_CODE,
            _ => 1,
        }
    }
}
