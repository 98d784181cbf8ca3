use anyhow::Result;
use clap::Parser;

use zcalc::cli::Cli;

fn main() -> Result<()> {
    zcalc::session::run(Cli::parse())
}
