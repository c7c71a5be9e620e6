//! CLI options.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(about, version)]
pub struct Opts {
    /// Path to the workbook
    pub path: PathBuf,

    /// Header of the column holding the X values
    #[arg(short = 'x', long, env = "FITLINE_X_COLUMN")]
    pub x_column: String,

    /// Header of the column holding the Y values
    #[arg(short = 'y', long, env = "FITLINE_Y_COLUMN")]
    pub y_column: String,

    /// Increases log verbosity
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

pub fn parse() -> Opts {
    Opts::parse()
}
