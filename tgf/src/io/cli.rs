use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to lay out (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which the solution (JSON and SVG) is written
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Falls back on an overlapping layout even if the instance is not flagged as over-filled
    #[arg(long)]
    pub permit_overlap: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
