use super::config::ConversionConfig;
use super::invocation::{
    build_invocation, configure_invocation, Invocation, BUILD_LOG, CONFIGURE_LOG,
};
use crate::error::PipelineError;
use crate::utils::progress::ProgressReporter;
use crate::utils::runner::ProcessRunner;
use crate::utils::workdir::ScopedDirectory;
use log::{debug, error};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Configure, change directory, build, return. Any failure ends the run.
pub struct Pipeline<'a, R: ProcessRunner, W: Write> {
    config: &'a ConversionConfig,
    runner: R,
    reporter: ProgressReporter<W>,
}

impl<'a, R: ProcessRunner, W: Write> Pipeline<'a, R, W> {
    pub fn new(config: &'a ConversionConfig, runner: R, reporter: ProgressReporter<W>) -> Self {
        Pipeline {
            config,
            runner,
            reporter,
        }
    }

    pub fn into_parts(self) -> (R, ProgressReporter<W>) {
        (self.runner, self.reporter)
    }

    pub fn run(&mut self) -> Result<(), PipelineError> {
        self.configure()?;
        self.build()?;
        self.reporter.report(format_args!(
            "bcl to fastq conversion finished; output in {}",
            self.config.output_dir.display()
        ));
        Ok(())
    }

    fn configure(&mut self) -> Result<(), PipelineError> {
        let invocation = configure_invocation(self.config);
        self.reporter.report(format_args!(
            "Configuring bcl to fastq conversion; see {} for details",
            CONFIGURE_LOG
        ));

        let code = self.execute(&invocation, Path::new(CONFIGURE_LOG))?;
        if code != 0 {
            error!(
                "{} exited with code {}; see {}",
                invocation.program, code, CONFIGURE_LOG
            );
            return Err(PipelineError::ConfigureFailed { code });
        }
        Ok(())
    }

    fn build(&mut self) -> Result<(), PipelineError> {
        let config = self.config;
        let output_dir = &config.output_dir;
        let invocation = build_invocation(config);
        // relative to the output directory
        let log_path = Path::new("..").join(BUILD_LOG);

        self.reporter
            .report(format_args!("Changing directory to {}", output_dir.display()));
        // the output directory only exists once configureBclToFastq.pl has run
        let guard = if config.dry_run {
            None
        } else {
            Some(ScopedDirectory::enter(output_dir)?)
        };

        self.reporter.report(format_args!(
            "Running bcl to fastq conversion with {} jobs; see {} for details",
            config.jobs,
            build_log_location(output_dir).display()
        ));
        let result = self.execute(&invocation, &log_path);

        if let Some(guard) = guard {
            self.reporter
                .report(format_args!("Returning to {}", guard.original().display()));
            guard.restore()?;
        }

        let code = result?;
        if code != 0 {
            error!(
                "{} exited with code {}; see {}",
                invocation.program,
                code,
                build_log_location(output_dir).display()
            );
            return Err(PipelineError::BuildFailed { code });
        }
        Ok(())
    }

    fn execute(&mut self, invocation: &Invocation, log_path: &Path) -> Result<i32, PipelineError> {
        if self.config.dry_run {
            self.reporter.report(format_args!(
                "(DRY_RUN): {} > {}",
                invocation,
                log_path.display()
            ));
        } else {
            debug!("{} > {}", invocation, log_path.display());
        }
        self.runner.run(invocation, log_path)
    }
}

/// Where the build log ends up, as seen from the run directory.
pub fn build_log_location(output_dir: &Path) -> PathBuf {
    output_dir.join("..").join(BUILD_LOG)
}
