use log::{info, SetLoggerError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use super::options::Verbosity;

/// Install a terminal logger for programs embedding the codecs.
///
/// The codecs only log through the `log` facade, at debug and trace level. Without
/// a logger installed they stay silent. Fails if a logger was already set.
pub fn init_logging(verbose: Verbosity) -> Result<(), SetLoggerError> {
    TermLogger::init(
        verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    info!("Verbosity set to {}", log::max_level());
    Ok(())
}

#[test]
fn second_logger_is_refused() {
    // Whichever test installs a logger first wins; the next attempt must fail.
    let _ = init_logging(Verbosity::Quiet);
    assert!(init_logging(Verbosity::Trace).is_err());
}
