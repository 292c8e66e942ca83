use std::fmt::Display;
use std::io::{self, Stdout, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes one timestamped line per pipeline step.
#[derive(Debug)]
pub struct ProgressReporter<W: Write> {
    output: W,
}

impl ProgressReporter<Stdout> {
    pub fn stdout() -> Self {
        ProgressReporter::new(io::stdout())
    }
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(output: W) -> Self {
        ProgressReporter { output }
    }

    /// A line that cannot be written is logged and dropped; the pipeline
    /// keeps going.
    pub fn report(&mut self, message: impl Display) {
        log::info!("{}", message);
        if let Err(e) = self.write_line(&message) {
            log::warn!("Failed to write progress: {}", e);
        }
    }

    fn write_line(&mut self, message: &impl Display) -> io::Result<()> {
        writeln!(
            self.output,
            "[{}] {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            message
        )?;
        self.output.flush()
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}
