// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Checksums `bigfile` in the working directory and logs the digest,
//! elapsed time and throughput.

use std::process::ExitCode;

use crc64stream::{logging, run, Table, DEFAULT_INPUT, POLY};

fn main() -> ExitCode {
    logging::init_logging();

    match run(DEFAULT_INPUT, || Table::new(POLY)) {
        Ok(report) => {
            report.log();
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
