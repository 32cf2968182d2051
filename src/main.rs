#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{cli, reader, report, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.input {
        Some(path) => {
            dlog!("mode=file input={}", path.display());
            reader::load_packages(path)?
        }
        None => {
            dlog!("mode=builtin");
            reader::default_packages()
        }
    };

    report::run(&packages, &cli, &mut std::io::stdout().lock())
}
