use super::config::ConversionConfig;
use std::ffi::OsString;
use std::fmt;
use std::process::Command;

/// Output of configureBclToFastq.pl, written to the run directory.
pub const CONFIGURE_LOG: &str = "configureBclToFastq.log";
/// Output of the build step, written next to the output directory.
pub const BUILD_LOG: &str = "bclToFastq.log";

/// An external program and its arguments, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn option(self, name: &str, value: impl Into<OsString>) -> Self {
        self.arg(name).arg(value)
    }

    /// Whether `name` appears among the arguments.
    pub fn has_arg(&self, name: &str) -> bool {
        self.args.iter().any(|x| x == name)
    }

    /// Value following the first occurrence of `name`.
    pub fn value_of(&self, name: &str) -> Option<&OsString> {
        self.args
            .iter()
            .position(|x| x == name)
            .and_then(|i| self.args.get(i + 1))
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg.replace('\'', "'\\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

pub fn configure_invocation(config: &ConversionConfig) -> Invocation {
    let invocation = Invocation::new(config.configure_program.as_str())
        .option("--input-dir", &config.input_dir)
        .option("--output-dir", &config.output_dir)
        .option("--mismatches", config.mismatches.to_string())
        .option("--fastq-cluster-count", "0")
        .option("--sample-sheet", &config.sample_sheet);

    match config.base_mask.as_deref() {
        Some(mask) => invocation.option("--use-bases-mask", mask),
        None => invocation,
    }
}

pub fn build_invocation(config: &ConversionConfig) -> Invocation {
    Invocation::new(config.make_program.as_str()).option("-j", config.jobs.to_string())
}
