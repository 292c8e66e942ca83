use crate::error::PipelineError;
use crate::logic::invocation::Invocation;
use log::{debug, warn};
use std::fs::File;
use std::path::Path;
use std::process::ExitStatus;

/// Runs external programs for the pipeline.
pub trait ProcessRunner {
    /// Run `invocation` until it exits, with stdout and stderr both written to
    /// `log_path`. Returns the exit code of the program.
    fn run(&mut self, invocation: &Invocation, log_path: &Path) -> Result<i32, PipelineError>;
}

/// Spawns programs found on `PATH` and blocks until they finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, log_path: &Path) -> Result<i32, PipelineError> {
        let log_error = |source: std::io::Error| PipelineError::LogFile {
            path: log_path.to_path_buf(),
            source,
        };
        let stdout_log = File::create(log_path).map_err(log_error)?;
        let stderr_log = stdout_log.try_clone().map_err(log_error)?;

        debug!("running {} > {}", invocation, log_path.display());
        let status = invocation
            .to_command()
            .stdout(stdout_log)
            .stderr(stderr_log)
            .status()
            .map_err(|source| PipelineError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        debug!("{} finished: {}", invocation.program, status);

        Ok(exit_code(&invocation.program, status))
    }
}

/// Exit code as a shell would report it: `128 + N` for a program killed by
/// signal N.
fn exit_code(program: &str, status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    warn!("{} was terminated without an exit code: {}", program, status);

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Runs nothing and reports success. The pipeline prints the commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunner;

impl ProcessRunner for DryRunner {
    fn run(&mut self, _invocation: &Invocation, _log_path: &Path) -> Result<i32, PipelineError> {
        Ok(0)
    }
}
