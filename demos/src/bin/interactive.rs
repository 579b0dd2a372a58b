/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use eccflow::{interactive, DemoConfigBuilder, EccError, KeyAgent};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    eccflow::init_logging();

    let config = match DemoConfigBuilder::new().build() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut agent = KeyAgent::urandom();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match interactive::run(&config, &mut agent, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(EccError::OutOfRange { .. }) => {
            println!("Invalid choice");
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
