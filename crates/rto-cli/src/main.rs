//! rto - reversible text optimizer.
//!
//! Thin command-line wrapper around `rto-codec`: stdin/stdout compress and
//! expand, dictionary listings, content analysis and batch round-trip checks.

use anyhow::Result;
use clap::Parser;

mod cli;
mod language;
mod logging;
mod verify;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose);
    cli::run(cli)
}
