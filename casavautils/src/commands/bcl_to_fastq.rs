use crate::logic::config::{
    default_jobs, ConversionConfig, DEFAULT_CONFIGURE_PROGRAM, DEFAULT_INPUT_DIR,
    DEFAULT_MAKE_PROGRAM, DEFAULT_MISMATCHES, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SHEET,
};
use crate::logic::pipeline::Pipeline;
use crate::utils::progress::ProgressReporter;
use crate::utils::runner::{DryRunner, SystemRunner};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Args)]
pub struct BclToFastq {
    #[arg(
        short = 'i',
        long = "input-dir",
        value_name = "INDIR",
        help = "Input directory with bcl base calls",
        default_value = DEFAULT_INPUT_DIR
    )]
    input_dir: PathBuf,
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "OUTDIR",
        help = "Output directory for demultiplexed FASTQ files",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    output_dir: PathBuf,
    #[arg(
        short = 's',
        long = "sample-sheet",
        value_name = "SAMPLESHEET",
        help = "Sample sheet",
        default_value = DEFAULT_SAMPLE_SHEET
    )]
    sample_sheet: PathBuf,
    #[arg(
        short = 'm',
        long = "mismatches",
        value_name = "MISMATCHES",
        help = "# of mismatches allowed in index reads",
        default_value_t = DEFAULT_MISMATCHES,
        allow_negative_numbers = true
    )]
    mismatches: u32,
    #[arg(
        short = 'b',
        long = "base-mask",
        value_name = "BASEMASK",
        help = "Bases mask [default: auto-detect from RunInfo.xml]"
    )]
    base_mask: Option<String>,
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "JOBS",
        help = "# of parallel make jobs",
        default_value_t = default_jobs(),
        value_parser = clap::value_parser!(u32).range(1..),
        allow_negative_numbers = true
    )]
    jobs: u32,
    #[arg(
        short = 'n',
        long = "dry-run",
        help = "Print commands instead of running them"
    )]
    dry_run: bool,
    #[arg(
        long = "configure-program",
        value_name = "PROGRAM",
        env = "BCL2FASTQ_CONFIGURE",
        help = "configureBclToFastq.pl executable",
        default_value = DEFAULT_CONFIGURE_PROGRAM
    )]
    configure_program: String,
    #[arg(
        long = "make-program",
        value_name = "PROGRAM",
        env = "BCL2FASTQ_MAKE",
        help = "make executable",
        default_value = DEFAULT_MAKE_PROGRAM
    )]
    make_program: String,
}

impl BclToFastq {
    pub fn config(&self) -> ConversionConfig {
        ConversionConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            sample_sheet: self.sample_sheet.clone(),
            mismatches: self.mismatches,
            base_mask: self.base_mask.clone(),
            jobs: self.jobs,
            configure_program: self.configure_program.clone(),
            make_program: self.make_program.clone(),
            dry_run: self.dry_run,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config();
        log::debug!("configuration: {:?}", config);

        let reporter = ProgressReporter::stdout();
        let result = if config.dry_run {
            Pipeline::new(&config, DryRunner, reporter).run()
        } else {
            Pipeline::new(&config, SystemRunner, reporter).run()
        };
        result.with_context(|| {
            format!(
                "Failed to convert {} into {}",
                config.input_dir.display(),
                config.output_dir.display()
            )
        })?;
        Ok(())
    }
}
