/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the process logger. Silent unless `RUST_LOG` asks for more, so
/// the demo output stays readable.
pub fn init() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Off).env().init() {
        eprintln!("logger already initialised: {e}");
    }
}
