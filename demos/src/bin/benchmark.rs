/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use eccflow::{benchmark, BenchConfigBuilder, KeyAgent};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    eccflow::init_logging();

    let config = match BenchConfigBuilder::new().build() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut agent = KeyAgent::urandom();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match benchmark::run(&config, &mut agent, &mut out) {
        Ok(reports) => {
            log::debug!("benchmarked {} curve(s)", reports.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
