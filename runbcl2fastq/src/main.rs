use casavautils::{BclToFastq, PipelineError};
use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::process::exit;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Configure and run CASAVA bcl to fastq conversion and demultiplexing"
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action= clap::ArgAction::Count, help="verbose level")]
    verbose: u8,
    #[command(flatten)]
    bcl_to_fastq: BclToFastq,
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<PipelineError>()
        .map(|x| x.exit_code())
        .unwrap_or(1)
}

fn main() {
    let matches = match Cli::try_parse() {
        Ok(matches) => matches,
        Err(e) => {
            // usage and help both go to stderr
            eprint!("{}", e.render());
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit(0),
                _ => exit(1),
            }
        }
    };

    match matches.verbose {
        1 => env::set_var("RUST_LOG", "info"),
        2 => env::set_var("RUST_LOG", "debug"),
        3 => env::set_var("RUST_LOG", "trace"),
        _ => {
            if env::var("RUST_LOG").is_err() {
                env::set_var("RUST_LOG", "warn")
            }
        }
    }

    pretty_env_logger::init();
    log::debug!("command line: {:?}", matches);

    if let Err(e) = matches.bcl_to_fastq.run() {
        eprintln!("Error: {:?}", e);
        exit(exit_code(&e));
    }
}
