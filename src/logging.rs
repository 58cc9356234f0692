use fern::{Dispatch, InitError};
use log::LevelFilter;
use std::io;

/// Routes our own records to stderr, one line per record.
///
/// At debug level and above the emitting module is included, so probe
/// chatter can be told apart from the controller's.
pub fn setup(filter: LevelFilter) -> Result<(), InitError> {
    let with_target = filter >= LevelFilter::Debug;

    Dispatch::new()
        .level(LevelFilter::Off)
        .level_for("tv_presence", filter)
        .level_for("tv_presence_zbus", filter)
        .format(move |out, message, record| {
            if with_target {
                out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
            } else {
                out.finish(format_args!("[{}] {}", record.level(), message))
            }
        })
        .chain(io::stderr())
        .apply()?;
    Ok(())
}
