use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "Data/Intensities/BaseCalls";
pub const DEFAULT_OUTPUT_DIR: &str = "Unaligned";
pub const DEFAULT_SAMPLE_SHEET: &str = "SampleSheet.csv";
pub const DEFAULT_MISMATCHES: u32 = 1;
pub const DEFAULT_CONFIGURE_PROGRAM: &str = "configureBclToFastq.pl";
pub const DEFAULT_MAKE_PROGRAM: &str = "make";

/// Settings for one bcl to fastq run. Built once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sample_sheet: PathBuf,
    pub mismatches: u32,
    /// `None` lets configureBclToFastq.pl detect the mask from RunInfo.xml.
    pub base_mask: Option<String>,
    pub jobs: u32,
    pub configure_program: String,
    pub make_program: String,
    /// Report the commands without running them.
    pub dry_run: bool,
}

/// Job count used when none is given on the command line.
pub fn default_jobs() -> u32 {
    u32::try_from(num_cpus::get()).unwrap_or(u32::MAX).max(1)
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_sheet: PathBuf::from(DEFAULT_SAMPLE_SHEET),
            mismatches: DEFAULT_MISMATCHES,
            base_mask: None,
            jobs: default_jobs(),
            configure_program: DEFAULT_CONFIGURE_PROGRAM.to_string(),
            make_program: DEFAULT_MAKE_PROGRAM.to_string(),
            dry_run: false,
        }
    }
}
