// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use std::process;
use tv_presence::{args::Args, daemon, logging};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(why) => {
            let _ = why.print();
            process::exit(if why.use_stderr() { 1 } else { 0 });
        }
    };

    logging::setup(args.level()).unwrap_or_else(|why| {
        eprintln!("failed to set up logging: {}", why);
        process::exit(1);
    });

    // Written directly so the reason survives `--quiet`.
    if let Err(why) = daemon::daemon(args) {
        eprintln!("tv-presence: {}", why);
        process::exit(1);
    }
}
