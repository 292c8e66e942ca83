pub mod progress;
pub mod runner;
pub mod workdir;
