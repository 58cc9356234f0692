use clap::Parser;
use log::LevelFilter;
use std::time::Duration;

/// Starts the media frontend while the TV answers on its HDCP i2c port, and
/// stops it while it does not
#[derive(Parser, Debug)]
#[command(name = "tv-presence", version)]
pub struct Args {
    /// Bus number of the display's i2c adapter, as in /dev/i2c-N
    #[arg(value_name = "I2C_DEV")]
    pub device: u32,

    /// Set the verbosity of logs to 'off' [default is 'info']
    #[arg(long, short, group = "verbosity")]
    quiet: bool,

    /// Set the verbosity of logs to 'debug' [default is 'info']
    #[arg(long, short, group = "verbosity")]
    verbose: bool,

    /// Give up on a frontend call that has not been answered after SECONDS
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

impl Args {
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn call_deadline(&self) -> Option<Duration> { self.timeout.map(Duration::from_secs) }
}
