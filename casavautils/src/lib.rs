pub mod commands;
pub mod error;
pub mod logic;
pub mod utils;

pub use commands::bcl_to_fastq::BclToFastq;
pub use error::PipelineError;
