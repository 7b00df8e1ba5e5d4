// CLI module for opusogg
//
// Only compiled into the binary, which needs the `libopus` feature.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::run;
pub use config::{Commands, Config, OutputFormat};
pub use output::{OutputFormatter, Summary};
