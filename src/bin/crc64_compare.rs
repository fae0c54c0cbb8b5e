// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Checksums `bigfile` with each engine in turn, timing each one, and fails
//! if any digest disagrees with the `crc` crate.

use std::process::ExitCode;

use crc64stream::{checksum_file, logging, Digest, Error, Report, Table, DEFAULT_INPUT, POLY};

const CRC_NVME: crc::Algorithm<u64> = crc::Algorithm {
    width: 64,
    poly: 0xAD93D23594C93659,
    init: 0xFFFFFFFFFFFFFFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFFFFFFFFFFFFFF,
    check: 0xae8b14860a799888,
    residue: 0x0000000000000000,
};

fn log_engine(engine: &str, report: &Report) {
    tracing::info!(
        engine,
        bytes = report.bytes,
        "{} in {:.2}ms ({:.2} GB/s)",
        report.hex_digest(),
        report.elapsed_ms(),
        report.actual_gigabytes_per_second()
    );
}

fn compare() -> Result<bool, Error> {
    let crc = crc::Crc::<u64>::new(&CRC_NVME);
    let table = Table::new(POLY);

    let reference = checksum_file(DEFAULT_INPUT, crc.digest())?;
    log_engine("crc", &reference);

    let mut agree = true;
    for (engine, digest) in [
        ("bytewise", Digest::new_bytewise(&table)),
        ("slice-by-8", Digest::new(&table)),
    ] {
        let report = checksum_file(DEFAULT_INPUT, digest)?;
        log_engine(engine, &report);
        if report.digest != reference.digest {
            tracing::error!(
                engine,
                "digest {} differs from crc {}",
                report.hex_digest(),
                reference.hex_digest()
            );
            agree = false;
        }
    }

    Ok(agree)
}

fn main() -> ExitCode {
    logging::init_logging();

    match compare() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
