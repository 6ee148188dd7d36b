//! goban CLI
//!
//! Usage:
//!   goban [OPTIONS]
//!
//! Options:
//!   -s, --size <SIZE>                Board size: 7, 9, 13 or 19 [default: 19]
//!   -m, --margin <MARGIN>            Margin around the grid in mm [default: 15]
//!       --rounded_corners <RADIUS>   Corner radius in mm, 0 for square [default: 10]
//!       --no_border                  Don't draw the board outline
//!       --half_board                 Draw one half of the board
//!       --test                       Draw a stroke calibration piece
//!       --line_count <COUNT>         Parallel strokes per line [default: 2]
//!       --line_spacing <MM>          Distance between strokes [default: 0.25]
//!       --palette <FILE>             TOML palette with colors and stroke width
//!   -o, --output <FILE>              Output file [default: goban.svg]
//!       --log_level <LEVEL>          off, error, warn, info, debug or trace [default: warn]
//!   -h, --help                       Print help
//!   -V, --version                    Print version
//!
//! Exits with status 1 and an `Error: ...` line on stderr when the drawing
//! cannot be produced.

use std::process;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use goban_svg::cli::{run, Args};

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
